// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels (Listener ↔ Processor)
// und ein Signal (Processor → Tick).

pub mod listener;
pub mod mdns;
pub mod processor;
pub mod tick;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use listener::listener_task;
pub use mdns::mdns_responder_task;
pub use processor::command_processor_task;
pub use tick::animation_tick_task;
pub use wifi::{connection_task, dhcp_task, net_task};
