//! Seiten-Renderer
//!
//! Baut die Antwort-Dokumente aus den festen Fragmenten und dem
//! aktuellen Zustand zusammen. Reine String-Konstruktion ohne
//! Seiteneffekte.

use core::fmt::Write as _;

use crate::pages::{
    ANIMATION_SECTION, PAGE_END, PAGE_HEAD, PAGE_NOT_FOUND, PAGE_NO_CONTENT, ROW_BREAK,
};
use crate::types::{AnimationKind, Reply, Selection, SpeedLevel};

/// Kapazität des Antwort-Puffers in Bytes
///
/// Die fertige Statusseite liegt unter 3 KB; mit Reserve.
pub const RESPONSE_CAPACITY: usize = 4096;

/// Fertig gerendertes Antwort-Dokument
pub type ResponseBuffer = heapless::String<RESPONSE_CAPACITY>;

/// Fehler-Typ des Renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    BufferOverflow,
}

/// Rendert das zur Antwort-Art passende Dokument
pub fn render_response(reply: Reply, selection: &Selection) -> Result<ResponseBuffer, RenderError> {
    match reply {
        Reply::Page => render_page(selection),
        Reply::NoContent => fixed_document(PAGE_NO_CONTENT),
        Reply::NotFound => fixed_document(PAGE_NOT_FOUND),
    }
}

/// Rendert die Statusseite mit den acht Steuer-Links
///
/// Jeder Link bekommt die Klasse `on` wenn er dem aktuellen Zustand
/// entspricht, sonst `off`. Reihenfolge und Zeilenumbrüche sind fest.
pub fn render_page(selection: &Selection) -> Result<ResponseBuffer, RenderError> {
    let mut page = ResponseBuffer::new();

    push(&mut page, PAGE_HEAD)?;
    push_speed_button(&mut page, selection, SpeedLevel::Slow)?;
    push_speed_button(&mut page, selection, SpeedLevel::Medium)?;
    push(&mut page, ROW_BREAK)?;
    push_speed_button(&mut page, selection, SpeedLevel::High)?;

    push(&mut page, ANIMATION_SECTION)?;
    push_animation_button(&mut page, selection, AnimationKind::Pump)?;
    push_animation_button(&mut page, selection, AnimationKind::Worm)?;
    push(&mut page, ROW_BREAK)?;
    push_animation_button(&mut page, selection, AnimationKind::Snake)?;
    push_animation_button(&mut page, selection, AnimationKind::Wave)?;
    push(&mut page, PAGE_END)?;

    Ok(page)
}

fn fixed_document(body: &str) -> Result<ResponseBuffer, RenderError> {
    let mut document = ResponseBuffer::new();
    push(&mut document, body)?;
    Ok(document)
}

fn push(buffer: &mut ResponseBuffer, fragment: &str) -> Result<(), RenderError> {
    buffer
        .push_str(fragment)
        .map_err(|_| RenderError::BufferOverflow)
}

fn push_speed_button(
    buffer: &mut ResponseBuffer,
    selection: &Selection,
    speed: SpeedLevel,
) -> Result<(), RenderError> {
    push_button(buffer, selection.speed == speed, speed.path(), speed.label())
}

fn push_animation_button(
    buffer: &mut ResponseBuffer,
    selection: &Selection,
    kind: AnimationKind,
) -> Result<(), RenderError> {
    push_button(buffer, selection.kind == kind, kind.path(), kind.label())
}

fn push_button(
    buffer: &mut ResponseBuffer,
    active: bool,
    href: &str,
    label: &str,
) -> Result<(), RenderError> {
    let class = if active { "on" } else { "off" };
    write!(
        buffer,
        "<a class=\"button {class}\" href=\"{href}\">{label}</a>\n"
    )
    .map_err(|_| RenderError::BufferOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_frame() {
        let page = render_page(&Selection::new()).unwrap();
        assert!(page.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(page.ends_with("</html>\r\n\r\n"));
    }

    #[test]
    fn test_fixed_documents() {
        let selection = Selection::new();
        let not_found = render_response(Reply::NotFound, &selection).unwrap();
        assert_eq!(not_found.as_str(), "HTTP/1.1 404 Not Found\r\n\r\n");
        let no_content = render_response(Reply::NoContent, &selection).unwrap();
        assert_eq!(no_content.as_str(), "HTTP/1.1 204 No Content\r\n\r\n");
    }
}
