use tracing::error;

use crate::ui::tui::Tui;

/// Restores the terminal and logs the panic, then chains to the installed hook.
pub fn set_panic_hook() {
    let report = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(e) = Tui::restore() {
            error!("Failed to restore terminal: {e}");
        }
        error!("{info}");
        report(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panics_still_unwind_through_hook() {
        set_panic_hook();
        let result = std::panic::catch_unwind(|| panic!("reel jammed"));
        let _ = std::panic::take_hook();

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"reel jammed"));
    }
}
