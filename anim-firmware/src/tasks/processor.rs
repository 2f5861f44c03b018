// Command-Processor Task - Wertet Request-Pfade aus und rendert Antworten
use defmt::{error, info};
use embassy_time::{Duration, with_timeout};

use crate::config::COMMAND_RECEIVE_TIMEOUT_MS;
use crate::{
    Command, CommandReceiver, Reply, ResponseSender, SharedSelection, SpeedSignal, render_response,
};

/// Command Processor Task
///
/// Einziger Schreiber des gemeinsamen Zustands. Holt Request-Pfade
/// mit kurzem Timeout vom Command-Channel ab - läuft kein Kommando
/// auf, ist das kein Fehler, sondern eine leere Runde.
///
/// Ablauf pro Kommando:
/// 1. Pfad zu einem Kommando auswerten
/// 2. Zustand unter dem Lock mutieren
/// 3. bei Geschwindigkeits-Wechsel den Tick-Task signalisieren
/// 4. Antwort-Dokument rendern und an den Listener zurückgeben
///
/// # Parameter
/// - `command_receiver`: Channel Receiver für Request-Pfade
/// - `response_sender`: Channel Sender für das Antwort-Dokument
/// - `selection`: gemeinsamer Muster-/Geschwindigkeits-Zustand
/// - `speed_signal`: Signal für Takt-Wechsel an den Tick-Task
#[embassy_executor::task]
pub async fn command_processor_task(
    command_receiver: CommandReceiver,
    response_sender: ResponseSender,
    selection: &'static SharedSelection,
    speed_signal: &'static SpeedSignal,
) {
    info!("Processor: task started");

    loop {
        let path = match with_timeout(
            Duration::from_millis(COMMAND_RECEIVE_TIMEOUT_MS),
            command_receiver.receive(),
        )
        .await
        {
            Ok(path) => path,
            Err(_) => continue, // kein Kommando anstehend
        };

        info!("Processor: request {}", path.as_str());
        let command = Command::from_path(&path);

        // Mutation unter dem Lock, Kopie des Zustands für den Renderer
        let (reply, speed_change, current) = selection.lock(|cell| {
            let mut selection = cell.borrow_mut();
            let (reply, speed_change) = command.apply(&mut selection);
            (reply, speed_change, *selection)
        });

        if let Some(speed) = speed_change {
            info!("Processor: rescheduling ticks at {} ms", speed.period_ms());
            speed_signal.signal(speed);
        }
        if reply == Reply::NotFound {
            info!("Processor: unknown path, responding 404");
        }

        match render_response(reply, &current) {
            Ok(response) => response_sender.send(response).await,
            // Kann mit den festen Fragmenten nicht eintreten; die
            // Verbindung läuft dann in den Response-Timeout.
            Err(_) => error!("Processor: response exceeds buffer capacity"),
        }
    }
}
