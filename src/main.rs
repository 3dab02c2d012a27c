use fltk::{
    app,
    dialog::{self, FileDialogType, NativeFileChooser},
    group::{Flex, FlexType},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextDisplay},
    window::Window,
};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use rich_text_editor::app::controllers::palette::notify;
use rich_text_editor::app::domain::settings::ThemeMode;
use rich_text_editor::app::services::page::load_page;
use rich_text_editor::app::{
    AppSettings, Appearance, ClosureBridge, Message, RichTextEditor, detect_system_appearance,
};
use rich_text_editor::ui::accessory_bar::{ACCESSORY_BAR_HEIGHT, AccessoryBar};
use rich_text_editor::ui::menu::{build_menu, sync_view_toggles};
use rich_text_editor::ui::theme::apply_theme;

const WINDOW_TITLE: &str = "Rich Text Editor";
const CONSOLE_HEIGHT: i32 = 110;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rich_text_editor=info,RichTextEditor=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn native_open_dialog(filter: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_filter(filter);
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn refresh_toolbar(editor: &Rc<RefCell<RichTextEditor>>, bar: &mut AccessoryBar, flex: &mut Flex) {
    let palette = editor.borrow_mut().input_accessory();
    bar.set_palette(palette);
    flex.layout();
}

fn save_settings(settings: &AppSettings) {
    if let Err(e) = settings.save() {
        tracing::warn!("Failed to save settings: {e}");
    }
}

fn main() {
    init_tracing();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut settings = AppSettings::load();
    let system_appearance = detect_system_appearance();
    let mut appearance = settings.appearance(system_appearance);

    let mut wind = Window::new(100, 100, 720, 520, WINDOW_TITLE);

    let mut flex = Flex::new(0, 0, 720, 520, None);
    flex.set_type(FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut document = HelpView::new(0, 0, 0, 0, None);

    let mut bar = AccessoryBar::new(0, 0, 720);
    flex.fixed(&bar.widget, ACCESSORY_BAR_HEIGHT);

    let console_buf = TextBuffer::default();
    let mut console = TextDisplay::new(0, 0, 0, 0, None);
    console.set_buffer(console_buf.clone());
    flex.fixed(&console, CONSOLE_HEIGHT);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    build_menu(&mut menu, &sender, settings.palette.enabled, appearance);

    match load_page(settings.start_page.as_deref()) {
        Ok(html) => document.set_value(&html),
        Err(e) => {
            tracing::warn!("Failed to load start page: {e}");
            if let Ok(html) = load_page(None) {
                document.set_value(&html);
            }
        }
    }

    // Until a scripting engine is embedded, issued scripts go to the console
    let mut console_log = console_buf.clone();
    let bridge = ClosureBridge::new(move |script: &str| {
        console_log.append(script);
        console_log.append("\n");
        Ok(())
    });
    let editor = RichTextEditor::new(Box::new(bridge), settings.palette.clone(), appearance);

    refresh_toolbar(&editor, &mut bar, &mut flex);
    apply_theme(&mut document, &mut console, &mut wind, &mut menu, appearance);
    wind.show();

    let mut console_buf = console_buf;
    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::OpenPage => {
                let Some(path) = native_open_dialog("*.{html,htm}") else {
                    continue;
                };
                match load_page(Some(Path::new(&path))) {
                    Ok(html) => {
                        document.set_value(&html);
                        wind.set_label(&format!("{WINDOW_TITLE} - {path}"));
                    }
                    Err(e) => dialog::alert_default(&format!("Failed to open page: {e}")),
                }
            }
            Message::Quit => app.quit(),
            Message::Format(command) => notify(&mut *editor.borrow_mut(), command),
            Message::ToggleToolbar => {
                let enabled = {
                    let mut ed = editor.borrow_mut();
                    let config = ed.config_mut();
                    config.enabled = !config.enabled;
                    let enabled = config.enabled;
                    ed.invalidate_accessory();
                    enabled
                };
                settings.palette.enabled = enabled;
                save_settings(&settings);
                refresh_toolbar(&editor, &mut bar, &mut flex);
            }
            Message::ReloadToolbar => {
                settings = AppSettings::load();
                appearance = settings.appearance(system_appearance);
                {
                    let mut ed = editor.borrow_mut();
                    *ed.config_mut() = settings.palette.clone();
                    ed.set_appearance(appearance);
                    ed.invalidate_accessory();
                }
                refresh_toolbar(&editor, &mut bar, &mut flex);
                apply_theme(&mut document, &mut console, &mut wind, &mut menu, appearance);
                sync_view_toggles(&mut menu, settings.palette.enabled, appearance);
            }
            Message::ToggleDarkMode => {
                appearance = match appearance {
                    Appearance::Light => Appearance::Dark,
                    Appearance::Dark => Appearance::Light,
                };
                {
                    let mut ed = editor.borrow_mut();
                    ed.set_appearance(appearance);
                    ed.invalidate_accessory();
                }
                refresh_toolbar(&editor, &mut bar, &mut flex);
                apply_theme(&mut document, &mut console, &mut wind, &mut menu, appearance);

                settings.theme_mode = match appearance {
                    Appearance::Light => ThemeMode::Light,
                    Appearance::Dark => ThemeMode::Dark,
                };
                save_settings(&settings);
            }
            Message::ClearConsole => console_buf.set_text(""),
        }
    }
}
