// HAL-Modul: Hardware-Implementierungen der Core-Traits

pub mod led_bank;

pub use led_bank::GpioLedBank;
