// GPIO LED Bank - Implementierung des LedOutputs Traits
//
// Sechs Push-Pull-Ausgänge: drei Positions-LEDs und die drei Kanäle
// der RGB LED. Die Pin-Belegung ist in config.rs dokumentiert.

use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO14, GPIO16, GPIO17, GPIO25, GPIO26, GPIO27};

use anim_core::{LedError, LedOutputs, LedPin};

/// LED-Bank auf den sechs GPIO-Ausgängen des Boards
///
/// Alle Pins starten low (alle LEDs aus).
pub struct GpioLedBank<'a> {
    left: Output<'a>,
    middle: Output<'a>,
    right: Output<'a>,
    red: Output<'a>,
    green: Output<'a>,
    blue: Output<'a>,
}

impl<'a> GpioLedBank<'a> {
    /// Übernimmt die sechs Pin-Peripherals und konfiguriert sie als Ausgänge
    pub fn new(
        left: GPIO26<'a>,
        middle: GPIO25<'a>,
        right: GPIO17<'a>,
        red: GPIO14<'a>,
        green: GPIO16<'a>,
        blue: GPIO27<'a>,
    ) -> Self {
        Self {
            left: Output::new(left, Level::Low, OutputConfig::default()),
            middle: Output::new(middle, Level::Low, OutputConfig::default()),
            right: Output::new(right, Level::Low, OutputConfig::default()),
            red: Output::new(red, Level::Low, OutputConfig::default()),
            green: Output::new(green, Level::Low, OutputConfig::default()),
            blue: Output::new(blue, Level::Low, OutputConfig::default()),
        }
    }

    fn output(&mut self, pin: LedPin) -> &mut Output<'a> {
        match pin {
            LedPin::Left => &mut self.left,
            LedPin::Middle => &mut self.middle,
            LedPin::Right => &mut self.right,
            LedPin::ColorRed => &mut self.red,
            LedPin::ColorGreen => &mut self.green,
            LedPin::ColorBlue => &mut self.blue,
        }
    }
}

impl LedOutputs for GpioLedBank<'_> {
    // GPIO-Schreibzugriffe können auf dieser Hardware nicht
    // fehlschlagen; das Result gehört zum Trait-Kontrakt.
    fn set_output(&mut self, pin: LedPin, level: bool) -> Result<(), LedError> {
        let level = if level { Level::High } else { Level::Low };
        self.output(pin).set_level(level);
        Ok(())
    }
}
