// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_animation::config::{EXTRA_HEAP_SIZE, WIFI_HEAP_SIZE};
use esp_led_animation::tasks::{
    animation_tick_task, command_processor_task, connection_task, dhcp_task, listener_task,
    mdns_responder_task, net_task,
};
use esp_led_animation::{
    CommandChannel, ResponseChannel, Selection, SharedSelection, SpeedSignal,
};

use core::cell::RefCell;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, WiFi, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    // Zwei Bereiche: reclaimed RAM (64 KB) + extra (36 KB) = 100 KB total
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Netzwerk-Stack erstellen
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Static resources für embassy-net
    // 6 Sockets: HTTP-Listener (1) + mDNS UDP (1) + DHCP/DNS + Reserve
    static RESOURCES: static_cell::StaticCell<StackResources<6>> = static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // embassy-net erstellt Stack + Runner (nutzt STA interface für Client-Modus)
    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    // Gemeinsamer Zustand: Muster + Geschwindigkeit, startet mit
    // Pump bei 500 ms. Mutiert nur vom Command-Processor.
    static SELECTION: static_cell::StaticCell<SharedSelection> = static_cell::StaticCell::new();
    let selection = &*SELECTION.init(Mutex::new(RefCell::new(Selection::new())));

    // Signal für Geschwindigkeits-Wechsel (Processor → Tick-Task)
    static SPEED_SIGNAL: static_cell::StaticCell<SpeedSignal> = static_cell::StaticCell::new();
    let speed_signal = &*SPEED_SIGNAL.init(Signal::new());

    // Command-Channel erstellen (Listener → Processor)
    // Ein langlebiger Channel mit Kapazität 1, angelegt beim Start
    static COMMAND_CHANNEL: static_cell::StaticCell<CommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(CommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Response-Channel erstellen (Processor → Listener)
    static RESPONSE_CHANNEL: static_cell::StaticCell<ResponseChannel> =
        static_cell::StaticCell::new();
    let response_channel = RESPONSE_CHANNEL.init(ResponseChannel::new());
    let response_sender = response_channel.sender();
    let response_receiver = response_channel.receiver();

    // Spawn Tick-Task (besitzt die sechs LED-Pins und die Engine)
    spawner
        .spawn(animation_tick_task(
            peripherals.GPIO26, // links
            peripherals.GPIO25, // mitte
            peripherals.GPIO17, // rechts
            peripherals.GPIO14, // rot
            peripherals.GPIO16, // grün
            peripherals.GPIO27, // blau
            selection,
            speed_signal,
        ))
        .unwrap();

    // Spawn Command-Processor (einziger Schreiber des Zustands)
    spawner
        .spawn(command_processor_task(
            command_receiver,
            response_sender,
            selection,
            speed_signal,
        ))
        .unwrap();

    // Spawn WiFi Tasks
    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_task(stack)).unwrap();

    // Spawn HTTP Listener (ein Client zur Zeit)
    spawner
        .spawn(listener_task(stack, command_sender, response_receiver))
        .unwrap();

    // Spawn mDNS Responder Task (für led-anim.local Hostname)
    spawner.spawn(mdns_responder_task(stack)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
