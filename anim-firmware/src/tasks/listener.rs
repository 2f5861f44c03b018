// Listener Task - Nimmt HTTP-Verbindungen an und reicht Pfade weiter
//
// Bewusst kein HTTP-Server: gelesen wird nur die Request-Zeile, und
// daraus nur das Request-Target zwischen den ersten beiden
// Leerzeichen. Ein Client zur Zeit, keine Keep-Alive-Verbindungen.
use defmt::{Debug2Format, info, warn};
use embassy_net::Stack;
use embassy_net::tcp::TcpSocket;
use embassy_time::{Duration, Timer, with_timeout};
use embedded_io_async::{Read, Write};

use crate::config::{
    CLIENT_GRACE_DELAY_MS, COMMAND_SEND_TIMEOUT_MS, HTTP_PORT, REQUEST_LINE_BUFFER_SIZE,
    RESPONSE_WAIT_TIMEOUT_MS, SOCKET_TIMEOUT_SECS, TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE,
};
use crate::{CommandSender, RequestPath, ResponseReceiver};

/// Listener Task - läuft parallel zu anderen Tasks
///
/// Nimmt eine Client-Verbindung an, liest die Request-Zeile, stellt
/// das Request-Target in den Command-Channel ein und schreibt das
/// vom Processor zurückgereichte Dokument auf den Socket.
///
/// Fehlerhafte oder hängende Verbindungen werden ohne Antwort
/// geschlossen; der Client muss selbst neu anfragen.
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `command_sender`: Channel Sender für Request-Pfade
/// - `response_receiver`: Channel Receiver für das Antwort-Dokument
#[embassy_executor::task]
pub async fn listener_task(
    stack: &'static Stack<'static>,
    command_sender: CommandSender,
    response_receiver: ResponseReceiver,
) {
    info!("Listener: task started, waiting for network...");
    wait_for_network(stack).await;
    info!("Listener: listening on port {}", HTTP_PORT);

    // TCP-Buffers für den Socket, über alle Verbindungen wiederverwendet
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    loop {
        let mut socket = TcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(SOCKET_TIMEOUT_SECS)));

        if let Err(e) = socket.accept(HTTP_PORT).await {
            warn!("Listener: accept failed: {}", Debug2Format(&e));
            continue;
        }

        match handle_connection(&mut socket, &command_sender, &response_receiver).await {
            Ok(()) => {
                // Dem Browser Zeit geben die Daten anzunehmen
                Timer::after(Duration::from_millis(CLIENT_GRACE_DELAY_MS)).await;
            }
            Err(e) => info!("Listener: connection dropped: {}", e),
        }

        socket.close();
    }
}

/// Wickelt eine angenommene Verbindung ab
///
/// Jeder Fehler bricht die Verbindung ohne Antwort ab; geantwortet
/// wird nur mit einem vollständig gerenderten Dokument.
async fn handle_connection(
    socket: &mut TcpSocket<'_>,
    command_sender: &CommandSender,
    response_receiver: &ResponseReceiver,
) -> Result<(), ListenerError> {
    let path = read_request_path(socket).await?;
    info!("Listener: request {}", path.as_str());

    // Liegengebliebene Antwort einer zuvor abgebrochenen Verbindung
    // verwerfen, sie gehört nicht zu diesem Client
    while response_receiver.try_receive().is_ok() {}

    // Einstellen mit begrenzter Wartezeit: bleibt der Slot belegt,
    // wird die Verbindung fallen gelassen statt endlos zu drehen
    with_timeout(
        Duration::from_millis(COMMAND_SEND_TIMEOUT_MS),
        command_sender.send(path),
    )
    .await
    .map_err(|_| ListenerError::CommandQueueFull)?;

    let response = with_timeout(
        Duration::from_millis(RESPONSE_WAIT_TIMEOUT_MS),
        response_receiver.receive(),
    )
    .await
    .map_err(|_| ListenerError::ResponseTimeout)?;

    socket
        .write_all(response.as_bytes())
        .await
        .map_err(|_| ListenerError::WriteFailed)?;
    socket.flush().await.map_err(|_| ListenerError::WriteFailed)?;

    Ok(())
}

/// Liest die Request-Zeile und extrahiert das Request-Target
///
/// Gelesen wird bis zum ersten '\r'; der Rest des Requests
/// interessiert nicht. Das Target steht zwischen den ersten beiden
/// Leerzeichen ("GET /speed_slow HTTP/1.1"). Fehlt eines davon, gilt
/// der Request als fehlerhaft. Überlange Targets werden auf die
/// Pfad-Kapazität abgeschnitten und laufen damit auf die 404-Seite.
async fn read_request_path(socket: &mut TcpSocket<'_>) -> Result<RequestPath, ListenerError> {
    let mut buffer = [0u8; REQUEST_LINE_BUFFER_SIZE];
    let mut len = 0;

    loop {
        if len == buffer.len() {
            break;
        }
        let n = socket
            .read(&mut buffer[len..])
            .await
            .map_err(|_| ListenerError::ReadFailed)?;
        if n == 0 {
            break; // Client hat geschlossen
        }
        len += n;
        if buffer[..len].contains(&b'\r') {
            break;
        }
    }

    let line =
        core::str::from_utf8(&buffer[..len]).map_err(|_| ListenerError::MalformedRequest)?;
    let line = match line.find('\r') {
        Some(end) => &line[..end],
        None => line,
    };

    let start = line.find(' ').ok_or(ListenerError::MalformedRequest)?;
    let rest = &line[start + 1..];
    let end = rest.find(' ').ok_or(ListenerError::MalformedRequest)?;
    let target = &rest[..end];

    let mut path = RequestPath::new();
    for c in target.chars() {
        if path.push(c).is_err() {
            break;
        }
    }
    Ok(path)
}

/// Listener Fehler-Typen
///
/// Alle Fälle führen zum selben Ergebnis: Verbindung schließen,
/// keine Antwort senden.
#[derive(Debug)]
enum ListenerError {
    /// Lesen vom Socket fehlgeschlagen oder Timeout
    ReadFailed,

    /// Request-Zeile ohne die beiden Leerzeichen-Trenner
    MalformedRequest,

    /// Command-Channel blieb über die Wartezeit hinaus belegt
    CommandQueueFull,

    /// Processor hat innerhalb der Wartezeit kein Dokument geliefert
    ResponseTimeout,

    /// Schreiben auf den Socket fehlgeschlagen
    WriteFailed,
}

impl defmt::Format for ListenerError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ListenerError::ReadFailed => defmt::write!(fmt, "read failed"),
            ListenerError::MalformedRequest => defmt::write!(fmt, "malformed request line"),
            ListenerError::CommandQueueFull => defmt::write!(fmt, "command queue full"),
            ListenerError::ResponseTimeout => defmt::write!(fmt, "response timeout"),
            ListenerError::WriteFailed => defmt::write!(fmt, "write failed"),
        }
    }
}

/// Wartet bis Netzwerk-Verbindung verfügbar ist
///
/// Prüft kontinuierlich Link-Status und DHCP-Konfiguration.
/// Identisches Pattern wie in `mdns.rs` verwendet.
async fn wait_for_network(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() {
            if let Some(_) = stack.config_v4() {
                break;
            }
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}
