//! Animations-Zustandsmaschinen
//!
//! Vier Muster mit festem Zyklus, angetrieben vom Tick-Task. Jedes
//! Muster schreibt pro Tick die drei Positions-LEDs und ruft an
//! festen Zählerständen den Farb-Rotor.

use crate::rotor::ColorRotor;
use crate::traits::{LedError, LedOutputs, LedPin};
use crate::types::AnimationKind;

/// Treibt die Positions-LEDs und den Farb-Rotor
///
/// Hält pro Muster einen eigenen Tick-Zähler. Beim Umschalten des
/// Musters läuft der Zähler des neuen Musters an seiner alten
/// Position weiter, er wird nicht auf 0 gestellt.
pub struct AnimationEngine {
    rotor: ColorRotor,
    cursors: [u8; 4],
}

impl AnimationEngine {
    pub const fn new() -> Self {
        Self {
            rotor: ColorRotor::new(),
            cursors: [0; 4],
        }
    }

    /// Tick-Zähler eines Musters
    pub fn cursor(&self, kind: AnimationKind) -> u8 {
        self.cursors[kind as usize]
    }

    /// Aktueller Rotor-Zustand
    pub fn rotor(&self) -> &ColorRotor {
        &self.rotor
    }

    /// Verbraucht einen Tick des gewählten Musters
    ///
    /// Schreibt die LED-Ausgänge für den aktuellen Zählerstand und
    /// schaltet den Zähler modulo der Muster-Periode weiter.
    pub fn step<L: LedOutputs>(
        &mut self,
        kind: AnimationKind,
        outputs: &mut L,
    ) -> Result<(), LedError> {
        let tick = self.cursors[kind as usize];
        match kind {
            AnimationKind::Pump => self.step_pump(tick, outputs)?,
            AnimationKind::Worm => self.step_worm(tick, outputs)?,
            AnimationKind::Snake => self.step_snake(tick, outputs)?,
            AnimationKind::Wave => self.step_wave(tick, outputs)?,
        }
        self.cursors[kind as usize] = (tick + 1) % kind.period();
        Ok(())
    }

    /// Pump: Balken läuft von links auf, kein Löschen vorab
    fn step_pump<L: LedOutputs>(&mut self, tick: u8, outputs: &mut L) -> Result<(), LedError> {
        outputs.set_output(LedPin::Left, tick > 0)?;
        outputs.set_output(LedPin::Middle, tick > 1)?;
        outputs.set_output(LedPin::Right, tick > 2)?;
        if tick == 3 {
            self.rotor.advance(outputs)?;
        }
        Ok(())
    }

    /// Worm: ein Licht wandert hin und zurück
    fn step_worm<L: LedOutputs>(&mut self, tick: u8, outputs: &mut L) -> Result<(), LedError> {
        self.rotor.clear(outputs)?;
        outputs.set_output(LedPin::Left, tick == 0 || tick == 7)?;
        outputs.set_output(LedPin::Middle, tick == 1 || tick == 6)?;
        outputs.set_output(LedPin::Right, tick == 2 || tick == 5)?;
        if tick == 3 {
            self.rotor.advance(outputs)?;
        }
        if tick == 4 {
            self.rotor.hold(outputs)?;
        }
        Ok(())
    }

    /// Snake: zwei Lichter wandern hin und zurück
    fn step_snake<L: LedOutputs>(&mut self, tick: u8, outputs: &mut L) -> Result<(), LedError> {
        self.rotor.clear(outputs)?;
        outputs.set_output(LedPin::Left, tick == 0 || tick == 1 || tick == 7)?;
        outputs.set_output(LedPin::Middle, tick == 1 || tick == 2 || tick == 6 || tick == 7)?;
        outputs.set_output(LedPin::Right, tick == 2 || tick == 3 || tick == 5 || tick == 6)?;
        if tick == 3 {
            self.rotor.advance(outputs)?;
        }
        if tick == 4 || tick == 5 {
            self.rotor.hold(outputs)?;
        }
        Ok(())
    }

    /// Wave: außen und Mitte wechseln sich ab
    fn step_wave<L: LedOutputs>(&mut self, tick: u8, outputs: &mut L) -> Result<(), LedError> {
        self.rotor.clear(outputs)?;
        outputs.set_output(LedPin::Left, tick == 1 || tick == 4)?;
        outputs.set_output(LedPin::Middle, tick == 0 || tick == 5)?;
        outputs.set_output(LedPin::Right, tick == 0 || tick == 5)?;
        if tick == 1 {
            self.rotor.advance(outputs)?;
        }
        if tick == 4 {
            self.rotor.hold(outputs)?;
        }
        Ok(())
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new()
    }
}
