// Tasks-Modul: Alle Embassy Tasks für parallele Ausführung
//
// Jeder Task läuft als eigenständige async-Funktion im Executor.
// Der LED-Task ist der einzige, der den Effekt-Controller anfasst.

pub mod button;
pub mod led_effect;

// Re-exports für einfacheren Zugriff
pub use button::button_task;
pub use led_effect::{led_effect_logic, led_effect_task};
