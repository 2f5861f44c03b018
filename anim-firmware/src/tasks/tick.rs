// Tick-Task - Treibt die aktive Animation im eingestellten Takt
use defmt::{error, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};

use crate::hal::GpioLedBank;
use crate::{AnimationEngine, SharedSelection, SpeedSignal};

use esp_hal::peripherals::{GPIO14, GPIO16, GPIO17, GPIO25, GPIO26, GPIO27};

/// Animation Tick Task
///
/// Besitzt die LED-Ausgänge und die Animations-Engine exklusiv;
/// niemand sonst fasst Cursor oder Rotor an. Vom gemeinsamen Zustand
/// wird pro Tick nur das aktuelle Muster gelesen.
///
/// Der Takt kommt aus einem einfachen Timer-Delay. Ein Geschwindigkeits-
/// Wechsel über das Signal bricht das laufende Delay ab und startet es
/// mit der neuen Periode neu - wie beim Stoppen und Neu-Aufziehen eines
/// periodischen Timers. Verpasste Ticks werden weder nachgeholt noch
/// aufgestaut.
///
/// # Parameter
/// - `left`/`middle`/`right`: Pins der Positions-LEDs
/// - `red`/`green`/`blue`: Pins der RGB-Kanäle
/// - `selection`: gemeinsamer Muster-/Geschwindigkeits-Zustand
/// - `speed_signal`: Signal für Takt-Wechsel vom Command-Processor
#[embassy_executor::task]
pub async fn animation_tick_task(
    left: GPIO26<'static>,
    middle: GPIO25<'static>,
    right: GPIO17<'static>,
    red: GPIO14<'static>,
    green: GPIO16<'static>,
    blue: GPIO27<'static>,
    selection: &'static SharedSelection,
    speed_signal: &'static SpeedSignal,
) {
    // Hardware initialisieren: alle sechs Pins als Ausgang, low
    let mut leds = GpioLedBank::new(left, middle, right, red, green, blue);
    let mut engine = AnimationEngine::new();

    let initial_speed = selection.lock(|cell| cell.borrow().speed);
    let mut interval = Duration::from_millis(initial_speed.period_ms());
    info!("Tick: task started, {} ms interval", interval.as_millis());

    loop {
        match select(Timer::after(interval), speed_signal.wait()).await {
            // Tick fällig: Muster lesen und einen Schritt ausführen
            Either::First(()) => {
                let kind = selection.lock(|cell| cell.borrow().kind);
                if engine.step(kind, &mut leds).is_err() {
                    error!("Tick: failed to write LED outputs");
                }
            }
            // Geschwindigkeit gewechselt: Delay neu aufziehen
            Either::Second(speed) => {
                interval = Duration::from_millis(speed.period_ms());
                info!("Tick: interval changed to {} ms", interval.as_millis());
            }
        }
    }
}
