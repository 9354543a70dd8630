//! NurOS dark card on GTK 4.
//!
//! The widget tree mirrors the Repose shell; all styling comes from one CSS
//! provider attached to each widget's style context. Button hover and press
//! colors are the stylesheet's `:hover` and `:active` rules.

use gtk::prelude::*;
use gtk::{
    Align, Application, ApplicationWindow, Button, CssProvider, Entry, Frame, Label, Orientation,
    glib,
};
use nuros_dark_core::stylesheet::{BUTTON_NAME, CARD_NAME, INPUT_NAME, TITLE_NAME};
use nuros_dark_core::{Stylesheet, Theme};

const APP_ID: &str = "org.nuros.DarkCard";

fn build_ui(app: &Application) {
    let theme = Theme::default();
    let m = &theme.metrics;
    let s = &theme.strings;

    let window = ApplicationWindow::builder()
        .application(app)
        .title(s.window_title)
        .default_width(m.window_width as i32)
        .default_height(m.window_height as i32)
        .build();

    let main_box = gtk::Box::new(Orientation::Vertical, 0);
    window.set_child(Some(&main_box));

    // Centers the card in whatever space the window gives it.
    let alignment = gtk::Box::new(Orientation::Vertical, 0);
    alignment.set_hexpand(true);
    alignment.set_vexpand(true);
    alignment.set_halign(Align::Center);
    alignment.set_valign(Align::Center);
    main_box.append(&alignment);

    let card = Frame::new(None);
    card.set_widget_name(CARD_NAME);
    alignment.append(&card);

    let pad = m.card_padding as i32;
    let card_box = gtk::Box::new(Orientation::Vertical, m.card_spacing as i32);
    card_box.set_margin_start(pad);
    card_box.set_margin_end(pad);
    card_box.set_margin_top(pad);
    card_box.set_margin_bottom(pad);
    card.set_child(Some(&card_box));

    let title = Label::new(Some(s.heading));
    title.set_widget_name(TITLE_NAME);
    card_box.append(&title);

    let input = Entry::new();
    input.set_widget_name(INPUT_NAME);
    input.set_placeholder_text(Some(s.placeholder));
    card_box.append(&input);

    let button = Button::with_label(s.button);
    button.set_widget_name(BUTTON_NAME);
    button.connect_clicked(|_| log::info!("action button activated"));
    card_box.append(&button);

    let css = Stylesheet::gtk(&theme).to_string();
    let provider = CssProvider::new();
    provider.load_from_data(&css);

    let styled: [&gtk::Widget; 6] = [
        window.upcast_ref(),
        main_box.upcast_ref(),
        card.upcast_ref(),
        title.upcast_ref(),
        input.upcast_ref(),
        button.upcast_ref(),
    ];
    for widget in styled {
        // Per-widget providers do not cascade to children.
        #[allow(deprecated)]
        widget
            .style_context()
            .add_provider(&provider, gtk::STYLE_PROVIDER_PRIORITY_USER);
    }

    log::info!(
        "window {:?} built at {}x{}",
        s.window_title,
        m.window_width,
        m.window_height
    );
    window.present();
}

fn main() -> glib::ExitCode {
    env_logger::init();

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);
    app.run()
}
