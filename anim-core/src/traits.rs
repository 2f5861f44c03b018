//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Logische LED-Pins des Controllers
///
/// Drei Positions-LEDs für die Lauflicht-Muster und drei Kanäle
/// der RGB LED, die vom Farb-Rotor geschaltet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedPin {
    Left,
    Middle,
    Right,
    ColorRed,
    ColorGreen,
    ColorBlue,
}

/// Trait für den Zugriff auf die LED-Ausgänge
///
/// Abstrahiert die sechs binären GPIO-Ausgänge des Controllers.
///
/// # Implementierungen
/// - **Production:** GpioLedBank (ESP32 GPIO Peripherals)
/// - **Testing:** MockLedBank (in-memory Mock)
pub trait LedOutputs: Send {
    /// Setzt einen Ausgang auf high (`true`) oder low (`false`)
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_output(&mut self, pin: LedPin, level: bool) -> Result<(), LedError>;
}
