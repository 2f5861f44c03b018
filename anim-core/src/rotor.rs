//! Farb-Rotor für die RGB LED
//!
//! Zyklische Zustandsmaschine über die drei Farbkanäle. Der Zustand
//! wird ausschließlich über `advance` weitergeschaltet; `hold` und
//! `clear` schreiben nur Ausgänge.

use crate::traits::{LedError, LedOutputs, LedPin};

/// Aktive Farbe der RGB LED
///
/// `Off` ist nur der Startzustand; `advance` kehrt nie dorthin zurück.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorState {
    Off,
    Red,
    Blue,
    Green,
}

/// Farb-Rotor: schaltet die RGB LED zyklisch weiter
///
/// Zyklus: Off → Rot → Blau → Grün → Rot → ...
pub struct ColorRotor {
    state: ColorState,
}

impl ColorRotor {
    pub const fn new() -> Self {
        Self {
            state: ColorState::Off,
        }
    }

    /// Aktuelle Farbe
    pub fn state(&self) -> ColorState {
        self.state
    }

    /// Schaltet auf die nächste Farbe weiter
    ///
    /// Setzt genau einen Farbkanal und nimmt den vorherigen zurück.
    /// Aus `Off` wird nur Rot gesetzt, es gibt nichts zurückzunehmen.
    pub fn advance<L: LedOutputs>(&mut self, outputs: &mut L) -> Result<(), LedError> {
        match self.state {
            ColorState::Off => {
                outputs.set_output(LedPin::ColorRed, true)?;
                self.state = ColorState::Red;
            }
            ColorState::Red => {
                outputs.set_output(LedPin::ColorRed, false)?;
                outputs.set_output(LedPin::ColorBlue, true)?;
                self.state = ColorState::Blue;
            }
            ColorState::Blue => {
                outputs.set_output(LedPin::ColorBlue, false)?;
                outputs.set_output(LedPin::ColorGreen, true)?;
                self.state = ColorState::Green;
            }
            ColorState::Green => {
                outputs.set_output(LedPin::ColorGreen, false)?;
                outputs.set_output(LedPin::ColorRed, true)?;
                self.state = ColorState::Red;
            }
        }
        Ok(())
    }

    /// Setzt den Kanal der aktuellen Farbe erneut, ohne Zustandswechsel
    ///
    /// No-op wenn die LED noch aus ist.
    pub fn hold<L: LedOutputs>(&self, outputs: &mut L) -> Result<(), LedError> {
        match self.state {
            ColorState::Off => Ok(()),
            ColorState::Red => outputs.set_output(LedPin::ColorRed, true),
            ColorState::Blue => outputs.set_output(LedPin::ColorBlue, true),
            ColorState::Green => outputs.set_output(LedPin::ColorGreen, true),
        }
    }

    /// Nimmt alle drei Farbkanäle für einen Tick zurück
    ///
    /// Der Rotor-Zustand bleibt unverändert; `hold` stellt die Farbe
    /// im selben Tick wieder her, wenn das Muster es vorsieht.
    pub fn clear<L: LedOutputs>(&self, outputs: &mut L) -> Result<(), LedError> {
        outputs.set_output(LedPin::ColorRed, false)?;
        outputs.set_output(LedPin::ColorGreen, false)?;
        outputs.set_output(LedPin::ColorBlue, false)?;
        Ok(())
    }
}

impl Default for ColorRotor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PinRecorder {
        levels: [bool; 6],
    }

    impl PinRecorder {
        fn new() -> Self {
            Self { levels: [false; 6] }
        }

        fn level(&self, pin: LedPin) -> bool {
            self.levels[pin as usize]
        }
    }

    impl LedOutputs for PinRecorder {
        fn set_output(&mut self, pin: LedPin, level: bool) -> Result<(), LedError> {
            self.levels[pin as usize] = level;
            Ok(())
        }
    }

    #[test]
    fn test_advance_cycle() {
        let mut outputs = PinRecorder::new();
        let mut rotor = ColorRotor::new();
        assert_eq!(rotor.state(), ColorState::Off);

        rotor.advance(&mut outputs).unwrap();
        assert_eq!(rotor.state(), ColorState::Red);
        assert!(outputs.level(LedPin::ColorRed));

        rotor.advance(&mut outputs).unwrap();
        assert_eq!(rotor.state(), ColorState::Blue);
        assert!(!outputs.level(LedPin::ColorRed));
        assert!(outputs.level(LedPin::ColorBlue));

        rotor.advance(&mut outputs).unwrap();
        assert_eq!(rotor.state(), ColorState::Green);

        // Zurück zu Rot, nie wieder Off
        rotor.advance(&mut outputs).unwrap();
        assert_eq!(rotor.state(), ColorState::Red);
        assert!(outputs.level(LedPin::ColorRed));
        assert!(!outputs.level(LedPin::ColorGreen));
    }

    #[test]
    fn test_hold_keeps_state() {
        let mut outputs = PinRecorder::new();
        let mut rotor = ColorRotor::new();
        rotor.advance(&mut outputs).unwrap();

        rotor.clear(&mut outputs).unwrap();
        assert!(!outputs.level(LedPin::ColorRed));

        rotor.hold(&mut outputs).unwrap();
        assert_eq!(rotor.state(), ColorState::Red);
        assert!(outputs.level(LedPin::ColorRed));
    }

    #[test]
    fn test_hold_on_off_is_noop() {
        let mut outputs = PinRecorder::new();
        let rotor = ColorRotor::new();
        rotor.hold(&mut outputs).unwrap();
        assert_eq!(outputs.levels, [false; 6]);
    }
}
