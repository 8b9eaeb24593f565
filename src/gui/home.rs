use crate::gui::{FridayApp, Message};
use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

pub fn view(app: &FridayApp) -> Element<'_, Message> {
    let label = if app.state.is_listening() {
        "🎙️ Listening..."
    } else {
        "🎙️ Start Listening"
    };

    // No on_press while listening or booting: the button renders disabled
    let listening_btn = button(text(label))
        .padding(12)
        .style(button::success)
        .on_press_maybe(app.can_listen().then_some(Message::StartPressed));

    let transcript: Element<Message> = if app.state.transcript.is_empty() {
        text("Press the button and speak a command...")
            .style(text::secondary)
            .into()
    } else {
        text(&app.state.transcript).size(20).into()
    };

    let information = container(text(&app.state.information).size(18))
        .padding(10)
        .style(container::rounded_box)
        .width(Length::Fill);

    column![
        text("Voice Assistant (Friday)").size(36),
        text(&app.status).size(14).style(text::secondary),
        Space::with_height(10),
        listening_btn,
        transcript,
        information,
    ]
    .spacing(15)
    .padding(20)
    .align_x(Alignment::Center)
    .into()
}
