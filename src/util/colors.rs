use ratatui::style::Color;

pub const BACKGROUND: Color = Color::from_u32(0x00fef08a);
pub const BODY: Color = Color::from_u32(0x00f4e7c3);
pub const PANEL: Color = Color::from_u32(0x00d88b5d);
pub const DISPLAY: Color = Color::from_u32(0x002d2d2d);
pub const DISPLAY_TEXT: Color = Color::from_u32(0x00fde047);
pub const BUTTON: Color = Color::from_u32(0x005c3b2e);
pub const BUTTON_TEXT: Color = Color::White;
pub const OUTLINE: Color = Color::Black;
pub const TAPE: Color = Color::from_u32(0x004a4a4a);
