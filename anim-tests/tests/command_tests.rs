//! Integration Tests für Kommando-Auswertung, Renderer und Channel
//!
//! Diese Tests laufen auf dem Host (x86_64)

use anim_core::{
    AnimationEngine, AnimationKind, Command, LedError, LedOutputs, LedPin, Reply, RequestPath,
    Selection, SpeedLevel, render_page, render_response,
};

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;

fn request_path(s: &str) -> RequestPath {
    let mut path = RequestPath::new();
    path.push_str(s).unwrap();
    path
}

// ============================================================================
// Tests: Command::from_path
// ============================================================================

#[test]
fn test_parse_page_and_favicon() {
    assert_eq!(Command::from_path("/"), Command::RenderPage);
    assert_eq!(Command::from_path("/favicon.ico"), Command::Favicon);
}

#[test]
fn test_parse_speed_paths() {
    assert_eq!(
        Command::from_path("/speed_slow"),
        Command::SetSpeed(SpeedLevel::Slow)
    );
    assert_eq!(
        Command::from_path("/speed_medium"),
        Command::SetSpeed(SpeedLevel::Medium)
    );
    assert_eq!(
        Command::from_path("/speed_high"),
        Command::SetSpeed(SpeedLevel::High)
    );
}

#[test]
fn test_parse_animation_paths() {
    assert_eq!(
        Command::from_path("/animation_pump"),
        Command::SetAnimation(AnimationKind::Pump)
    );
    assert_eq!(
        Command::from_path("/animation_worm"),
        Command::SetAnimation(AnimationKind::Worm)
    );
    assert_eq!(
        Command::from_path("/animation_snake"),
        Command::SetAnimation(AnimationKind::Snake)
    );
    assert_eq!(
        Command::from_path("/animation_wave"),
        Command::SetAnimation(AnimationKind::Wave)
    );
}

#[test]
fn test_parse_unknown_paths() {
    assert_eq!(Command::from_path("/xyz"), Command::Unknown);
    assert_eq!(Command::from_path("/speed_"), Command::Unknown);
    assert_eq!(Command::from_path("/animation_pump/"), Command::Unknown);
}

// ============================================================================
// Tests: Command::apply
// ============================================================================

#[test]
fn test_apply_speed_change() {
    let mut selection = Selection::new();
    let (reply, speed_change) = Command::from_path("/speed_slow").apply(&mut selection);

    assert_eq!(reply, Reply::Page);
    assert_eq!(speed_change, Some(SpeedLevel::Slow));
    assert_eq!(selection.speed, SpeedLevel::Slow);
    assert_eq!(selection.speed.period_ms(), 1000);
    // Muster bleibt unangetastet
    assert_eq!(selection.kind, AnimationKind::Pump);
}

#[test]
fn test_apply_animation_change() {
    let mut selection = Selection::new();
    let (reply, speed_change) = Command::from_path("/animation_wave").apply(&mut selection);

    assert_eq!(reply, Reply::Page);
    // Kein Neu-Aufziehen des Timers bei Muster-Wechsel
    assert_eq!(speed_change, None);
    assert_eq!(selection.kind, AnimationKind::Wave);
    assert_eq!(selection.speed, SpeedLevel::Medium);
}

#[test]
fn test_apply_unknown_mutates_nothing() {
    let mut selection = Selection::new();
    let before = selection;
    let (reply, speed_change) = Command::from_path("/xyz").apply(&mut selection);

    assert_eq!(reply, Reply::NotFound);
    assert_eq!(speed_change, None);
    assert_eq!(selection, before);
}

#[test]
fn test_apply_favicon_skips_page() {
    let mut selection = Selection::new();
    let (reply, speed_change) = Command::from_path("/favicon.ico").apply(&mut selection);

    assert_eq!(reply, Reply::NoContent);
    assert_eq!(speed_change, None);
    assert_eq!(selection, Selection::new());
}

// ============================================================================
// Tests: Renderer
// ============================================================================

#[test]
fn test_render_marks_active_controls() {
    let selection = Selection {
        kind: AnimationKind::Snake,
        speed: SpeedLevel::High,
    };
    let page = render_page(&selection).unwrap();

    // Genau die zwei aktiven Links tragen die Klasse "on"
    assert_eq!(page.matches("class=\"button on\"").count(), 2);
    assert_eq!(page.matches("class=\"button off\"").count(), 6);
    assert!(page.contains("<a class=\"button on\" href=\"/speed_high\">High</a>\n"));
    assert!(page.contains("<a class=\"button on\" href=\"/animation_snake\">Snake</a>\n"));
    assert!(page.contains("<a class=\"button off\" href=\"/speed_medium\">Medium</a>\n"));
}

#[test]
fn test_render_section_order() {
    let page = render_page(&Selection::new()).unwrap();

    // Geschwindigkeits-Buttons vor dem Muster-Abschnitt
    let speed_pos = page.find("/speed_high").unwrap();
    let section_pos = page.find("Change the animation").unwrap();
    let animation_pos = page.find("/animation_pump").unwrap();
    assert!(speed_pos < section_pos);
    assert!(section_pos < animation_pos);
}

#[test]
fn test_render_fixed_documents() {
    let selection = Selection::new();

    let not_found = render_response(Reply::NotFound, &selection).unwrap();
    assert_eq!(not_found.as_str(), "HTTP/1.1 404 Not Found\r\n\r\n");

    let no_content = render_response(Reply::NoContent, &selection).unwrap();
    assert_eq!(no_content.as_str(), "HTTP/1.1 204 No Content\r\n\r\n");

    let page = render_response(Reply::Page, &selection).unwrap();
    assert!(page.starts_with("HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n"));
    assert!(page.ends_with("</html>\r\n\r\n"));
}

// ============================================================================
// Tests: Command-Channel Semantik (Kapazität 1)
// ============================================================================

#[test]
fn test_channel_single_slot() {
    let channel: Channel<NoopRawMutex, RequestPath, 1> = Channel::new();

    // Erster send belegt den Slot
    assert!(channel.try_send(request_path("/speed_slow")).is_ok());

    // Zweiter send wird abgewiesen statt zu überschreiben
    assert!(channel.try_send(request_path("/speed_high")).is_err());

    // Receive liefert das erste Kommando genau einmal
    let received = channel.try_receive().unwrap();
    assert_eq!(received.as_str(), "/speed_slow");
    assert!(channel.try_receive().is_err());

    // Slot ist danach wieder frei
    assert!(channel.try_send(request_path("/")).is_ok());
}

// ============================================================================
// End-to-End: Request → Zustand → Seite → Ticks
// ============================================================================

struct PinLevels {
    levels: [bool; 6],
}

impl PinLevels {
    fn new() -> Self {
        Self { levels: [false; 6] }
    }

    fn positional(&self) -> (bool, bool, bool) {
        (
            self.levels[LedPin::Left as usize],
            self.levels[LedPin::Middle as usize],
            self.levels[LedPin::Right as usize],
        )
    }
}

impl LedOutputs for PinLevels {
    fn set_output(&mut self, pin: LedPin, level: bool) -> Result<(), LedError> {
        self.levels[pin as usize] = level;
        Ok(())
    }
}

#[test]
fn test_worm_request_end_to_end() {
    let mut selection = Selection::new();
    let mut engine = AnimationEngine::new();
    let mut leds = PinLevels::new();

    // Client fragt /animation_worm an
    let command = Command::from_path("/animation_worm");
    let (reply, speed_change) = command.apply(&mut selection);
    assert_eq!(reply, Reply::Page);
    assert_eq!(speed_change, None);
    assert_eq!(selection.kind, AnimationKind::Worm);

    // Die nächste Seite zeigt Worm als aktiv
    let page = render_page(&selection).unwrap();
    assert!(page.contains("<a class=\"button on\" href=\"/animation_worm\">Worm</a>\n"));

    // Folgende Ticks fahren den Worm-Schedule ab Zähler 0
    engine.step(selection.kind, &mut leds).unwrap();
    assert_eq!(leds.positional(), (true, false, false));
    engine.step(selection.kind, &mut leds).unwrap();
    assert_eq!(leds.positional(), (false, true, false));
    engine.step(selection.kind, &mut leds).unwrap();
    assert_eq!(leds.positional(), (false, false, true));
}
