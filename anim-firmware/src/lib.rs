// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von anim-core
pub use anim_core::{
    AnimationEngine, AnimationKind, Command, LedError, LedOutputs, LedPin, Reply, RequestPath,
    ResponseBuffer, Selection, SpeedLevel, render_response,
};

// Embassy Sync-Typen
use core::cell::RefCell;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

// ============================================================================
// Type-Aliase für Channel- und Zustands-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Receiver<'static, NoopRawMutex, RequestPath, 1>
// Nutze:  CommandReceiver

/// Channel für Request-Pfade (Listener → Command-Processor)
/// - 1: Kapazität - genau ein Kommando kann anstehen. Der Listener
///   kann kein zweites einstellen bevor das erste abgeholt wurde,
///   Kommandos werden dadurch strikt der Reihe nach verarbeitet.
pub type CommandChannel = Channel<NoopRawMutex, RequestPath, 1>;

/// Sender für Request-Pfade (Listener-Seite)
pub type CommandSender = Sender<'static, NoopRawMutex, RequestPath, 1>;

/// Receiver für Request-Pfade (Processor-Seite)
pub type CommandReceiver = Receiver<'static, NoopRawMutex, RequestPath, 1>;

/// Channel für das gerenderte Antwort-Dokument (Processor → Listener)
/// - 1: Kapazität - zur offenen Verbindung gehört höchstens eine Antwort
pub type ResponseChannel = Channel<NoopRawMutex, ResponseBuffer, 1>;

/// Sender für Antwort-Dokumente (Processor-Seite)
pub type ResponseSender = Sender<'static, NoopRawMutex, ResponseBuffer, 1>;

/// Receiver für Antwort-Dokumente (Listener-Seite)
pub type ResponseReceiver = Receiver<'static, NoopRawMutex, ResponseBuffer, 1>;

/// Gemeinsamer Muster-/Geschwindigkeits-Zustand
///
/// Geschrieben nur vom Command-Processor, gelesen vom Tick-Task und
/// beim Seitenaufbau. Der Lock wird jeweils nur für die Dauer eines
/// einzelnen Zugriffs gehalten.
pub type SharedSelection = Mutex<CriticalSectionRawMutex, RefCell<Selection>>;

/// Signal für Geschwindigkeits-Wechsel (Processor → Tick-Task)
///
/// Ein Signal statt eines Channels: nur der letzte Wechsel zählt,
/// Zwischenwerte dürfen überschrieben werden.
pub type SpeedSignal = Signal<CriticalSectionRawMutex, SpeedLevel>;
