use fltk::{
    enums::Color,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::TextDisplay,
    window::Window,
};

use crate::app::domain::palette_config::Appearance;

pub fn apply_theme(
    document: &mut HelpView,
    console: &mut TextDisplay,
    window: &mut Window,
    menu: &mut MenuBar,
    appearance: Appearance,
) {
    match appearance {
        Appearance::Dark => {
            document.set_color(Color::from_rgb(30, 30, 30));
            document.set_text_color(Color::from_rgb(220, 220, 220));
            console.set_color(Color::from_rgb(24, 24, 24));
            console.set_text_color(Color::from_rgb(150, 200, 150));
            window.set_color(Color::from_rgb(25, 25, 25));
            window.set_label_color(Color::from_rgb(220, 220, 220));
            menu.set_color(Color::from_rgb(35, 35, 35));
            menu.set_text_color(Color::from_rgb(220, 220, 220));
            menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        }
        Appearance::Light => {
            document.set_color(Color::White);
            document.set_text_color(Color::Black);
            console.set_color(Color::from_rgb(245, 245, 245));
            console.set_text_color(Color::from_rgb(40, 90, 40));
            window.set_color(Color::from_rgb(240, 240, 240));
            window.set_label_color(Color::Black);
            menu.set_color(Color::from_rgb(240, 240, 240));
            menu.set_text_color(Color::Black);
            menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        }
    }

    document.redraw();
    console.redraw();
    window.redraw();
    menu.redraw();
}
