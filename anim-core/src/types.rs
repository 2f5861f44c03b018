//! Core Types für die Animations-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Maximale Länge eines Request-Pfads
///
/// Länger ankommende Pfade werden vom Listener abgeschnitten und
/// laufen dann als unbekannter Pfad auf die 404-Seite.
pub const REQUEST_PATH_CAPACITY: usize = 32;

/// Request-Pfad wie er vom Listener über den Command-Channel läuft
pub type RequestPath = heapless::String<REQUEST_PATH_CAPACITY>;

/// Die vier Animations-Muster des Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationKind {
    Pump,
    Worm,
    Snake,
    Wave,
}

impl AnimationKind {
    /// Alle Muster in Darstellungs-Reihenfolge der Statusseite
    pub const ALL: [AnimationKind; 4] = [
        AnimationKind::Pump,
        AnimationKind::Worm,
        AnimationKind::Snake,
        AnimationKind::Wave,
    ];

    /// Anzahl der Ticks bis sich das Muster wiederholt
    pub const fn period(self) -> u8 {
        match self {
            AnimationKind::Pump => 5,
            AnimationKind::Worm => 8,
            AnimationKind::Snake => 8,
            AnimationKind::Wave => 6,
        }
    }

    /// Request-Pfad der dieses Muster auswählt
    pub const fn path(self) -> &'static str {
        match self {
            AnimationKind::Pump => "/animation_pump",
            AnimationKind::Worm => "/animation_worm",
            AnimationKind::Snake => "/animation_snake",
            AnimationKind::Wave => "/animation_wave",
        }
    }

    /// Beschriftung des Buttons auf der Statusseite
    pub const fn label(self) -> &'static str {
        match self {
            AnimationKind::Pump => "Pump",
            AnimationKind::Worm => "Worm",
            AnimationKind::Snake => "Snake",
            AnimationKind::Wave => "Wave",
        }
    }
}

/// Die drei Geschwindigkeits-Stufen des Tick-Timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedLevel {
    Slow,
    Medium,
    High,
}

impl SpeedLevel {
    /// Alle Stufen in Darstellungs-Reihenfolge der Statusseite
    pub const ALL: [SpeedLevel; 3] = [SpeedLevel::Slow, SpeedLevel::Medium, SpeedLevel::High];

    /// Tick-Periode in Millisekunden
    pub const fn period_ms(self) -> u64 {
        match self {
            SpeedLevel::Slow => 1000,
            SpeedLevel::Medium => 500,
            SpeedLevel::High => 250,
        }
    }

    /// Request-Pfad der diese Stufe auswählt
    pub const fn path(self) -> &'static str {
        match self {
            SpeedLevel::Slow => "/speed_slow",
            SpeedLevel::Medium => "/speed_medium",
            SpeedLevel::High => "/speed_high",
        }
    }

    /// Beschriftung des Buttons auf der Statusseite
    pub const fn label(self) -> &'static str {
        match self {
            SpeedLevel::Slow => "Slow",
            SpeedLevel::Medium => "Medium",
            SpeedLevel::High => "High",
        }
    }
}

/// Aktuell gewähltes Muster und Geschwindigkeit
///
/// Wird nur vom Command-Processor mutiert; der Tick-Task liest das
/// Muster einmal pro Tick, der Renderer beides pro Seitenaufbau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    pub kind: AnimationKind,
    pub speed: SpeedLevel,
}

impl Selection {
    /// Startzustand des Controllers: Pump-Animation mit 500 ms Takt
    pub const fn new() -> Self {
        Self {
            kind: AnimationKind::Pump,
            speed: SpeedLevel::Medium,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

/// Antwort-Art die ein Kommando nach sich zieht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// Statusseite mit den acht Steuer-Links rendern
    Page,
    /// Favicon-Anfrage: festes 204-Dokument, keine Seite
    NoContent,
    /// Unbekannter Pfad: festes 404-Dokument
    NotFound,
}

/// Ein interpretierter Request-Pfad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    RenderPage,
    Favicon,
    SetSpeed(SpeedLevel),
    SetAnimation(AnimationKind),
    Unknown,
}

impl Command {
    /// Ordnet einen Request-Pfad einem Kommando zu
    ///
    /// Total über alle Eingaben: nicht zuordenbare Pfade werden
    /// `Unknown` und führen zur 404-Seite.
    pub fn from_path(path: &str) -> Self {
        if path == "/" {
            return Command::RenderPage;
        }
        if path == "/favicon.ico" {
            return Command::Favicon;
        }
        for speed in SpeedLevel::ALL {
            if path == speed.path() {
                return Command::SetSpeed(speed);
            }
        }
        for kind in AnimationKind::ALL {
            if path == kind.path() {
                return Command::SetAnimation(kind);
            }
        }
        Command::Unknown
    }

    /// Wendet das Kommando auf den gemeinsamen Zustand an
    ///
    /// Gibt die Antwort-Art zurück sowie die neue Geschwindigkeit,
    /// falls der Tick-Timer neu aufgezogen werden muss.
    /// Geschwindigkeits- und Muster-Kommandos fallen anschließend
    /// auf die Statusseite durch, genau wie "/".
    pub fn apply(self, selection: &mut Selection) -> (Reply, Option<SpeedLevel>) {
        match self {
            Command::RenderPage => (Reply::Page, None),
            Command::Favicon => (Reply::NoContent, None),
            Command::SetSpeed(speed) => {
                selection.speed = speed;
                (Reply::Page, Some(speed))
            }
            Command::SetAnimation(kind) => {
                selection.kind = kind;
                (Reply::Page, None)
            }
            Command::Unknown => (Reply::NotFound, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_known_paths() {
        assert_eq!(Command::from_path("/"), Command::RenderPage);
        assert_eq!(Command::from_path("/favicon.ico"), Command::Favicon);
        assert_eq!(
            Command::from_path("/speed_slow"),
            Command::SetSpeed(SpeedLevel::Slow)
        );
        assert_eq!(
            Command::from_path("/animation_snake"),
            Command::SetAnimation(AnimationKind::Snake)
        );
    }

    #[test]
    fn test_command_from_unknown_path() {
        assert_eq!(Command::from_path("/xyz"), Command::Unknown);
        assert_eq!(Command::from_path(""), Command::Unknown);
        assert_eq!(Command::from_path("/speed_slower"), Command::Unknown);
    }

    #[test]
    fn test_speed_periods() {
        assert_eq!(SpeedLevel::Slow.period_ms(), 1000);
        assert_eq!(SpeedLevel::Medium.period_ms(), 500);
        assert_eq!(SpeedLevel::High.period_ms(), 250);
    }

    #[test]
    fn test_initial_selection() {
        let selection = Selection::new();
        assert_eq!(selection.kind, AnimationKind::Pump);
        assert_eq!(selection.speed, SpeedLevel::Medium);
    }
}
