//! Side navigation shown on narrow screens. Page templates open and close it
//! through the global `openNav()` and `closeNav()` functions.

pub const MENU_ID: &str = "mobile-menu";
pub const OVERLAY_ID: &str = "overlay";

/// Inline styles applied to the side menu and the overlay behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub menu_display: &'static str,
    pub menu_width: &'static str,
    pub overlay_display: &'static str,
}

impl NavStyle {
    pub fn new(open: bool) -> Self {
        if open {
            Self {
                menu_display: "block",
                menu_width: "75%",
                overlay_display: "block",
            }
        } else {
            Self {
                menu_display: "none",
                menu_width: "0",
                overlay_display: "none",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_menu_covers_most_of_the_screen() {
        let style = NavStyle::new(true);
        assert_eq!(style.menu_display, "block");
        assert_eq!(style.menu_width, "75%");
        assert_eq!(style.overlay_display, "block");
    }

    #[test]
    fn closed_menu_hides_menu_and_overlay() {
        assert_eq!(
            NavStyle::new(false),
            NavStyle {
                menu_display: "none",
                menu_width: "0",
                overlay_display: "none",
            }
        );
    }
}
