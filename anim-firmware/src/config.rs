// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

// Pin-Belegung der sechs LEDs. Die Zuordnung zu den esp-hal
// Peripherals passiert in main.rs; die Nummern hier dokumentieren
// die Verdrahtung auf dem Breadboard.

/// GPIO-Pin der linken Positions-LED
pub const LEFT_LED_GPIO_PIN: u8 = 26;

/// GPIO-Pin der mittleren Positions-LED
pub const MIDDLE_LED_GPIO_PIN: u8 = 25;

/// GPIO-Pin der rechten Positions-LED
pub const RIGHT_LED_GPIO_PIN: u8 = 17;

/// GPIO-Pin des roten RGB-Kanals
pub const RGB_RED_GPIO_PIN: u8 = 14;

/// GPIO-Pin des grünen RGB-Kanals
pub const RGB_GREEN_GPIO_PIN: u8 = 16;

/// GPIO-Pin des blauen RGB-Kanals
pub const RGB_BLUE_GPIO_PIN: u8 = 27;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// HTTP Listener Konfiguration
// ============================================================================

/// TCP-Port des Listeners
pub const HTTP_PORT: u16 = 80;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Für ausgehende TCP-Daten zum Client
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Buffer für die Request-Zeile in Bytes
/// Gelesen wird nur bis zum ersten '\r'; der Rest des Requests
/// interessiert nicht
pub const REQUEST_LINE_BUFFER_SIZE: usize = 256;

/// Socket-Timeout in Sekunden
/// Deckt hängende Clients beim Lesen und Schreiben ab
pub const SOCKET_TIMEOUT_SECS: u64 = 10;

/// Wartezeit in Millisekunden vor dem Schließen der Verbindung
/// Gibt dem Browser Zeit, die Daten anzunehmen
pub const CLIENT_GRACE_DELAY_MS: u64 = 1;

// ============================================================================
// Command Channel Konfiguration
// ============================================================================

/// Timeout in Millisekunden für das Einstellen eines Kommandos
/// Ist der Channel-Slot so lange belegt, wird die Verbindung ohne
/// Antwort geschlossen
pub const COMMAND_SEND_TIMEOUT_MS: u64 = 500;

/// Timeout in Millisekunden für das Abholen eines Kommandos
/// Ablauf ist kein Fehler, der Processor dreht einfach die nächste
/// Runde
pub const COMMAND_RECEIVE_TIMEOUT_MS: u64 = 100;

/// Timeout in Millisekunden für das Warten auf das Antwort-Dokument
pub const RESPONSE_WAIT_TIMEOUT_MS: u64 = 1000;

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Der ESP32 wird erreichbar sein unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = "led-anim";

/// mDNS TTL (Time To Live) in Sekunden
/// Gibt an, wie lange andere Geräte die mDNS-Antwort cachen dürfen
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
/// Wartezeit nach Fehler vor erneutem Versuch
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port (Standard: 5353)
/// Multicast DNS nutzt Port 5353 laut RFC 6762
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251)
/// Standard mDNS Multicast-Gruppe laut RFC 6762
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
/// edge-nal-embassy benötigt Buffer für UDP-Pakete
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;
