use iced::widget::{container, image as iced_image};
use iced::{Element, Event, Length, Subscription, Task, Theme, event, keyboard};
use image::{DynamicImage, RgbImage};

use super::Message;

/// Single-window viewer for an annotated result.
pub struct ResultViewer {
    handle: iced_image::Handle,
}

impl ResultViewer {
    pub fn new(handle: iced_image::Handle) -> (Self, Task<Message>) {
        (Self { handle }, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyPressed => iced::exit(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(iced_image(self.handle.clone()))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(Message::KeyPressed),
            _ => None,
        })
    }
}

/// Convert an RGB buffer into an iced image handle.
pub fn to_handle(img: &RgbImage) -> iced_image::Handle {
    let rgba = DynamicImage::ImageRgb8(img.clone()).to_rgba8();
    let (width, height) = rgba.dimensions();
    iced_image::Handle::from_rgba(width, height, rgba.into_raw())
}

/// Show `img` in a window titled `title`, blocking until any key is
/// pressed or the window is closed.
pub fn show(title: &str, img: &RgbImage) -> iced::Result {
    let handle = to_handle(img);
    let title = title.to_string();
    let size = iced::Size::new(img.width() as f32, img.height() as f32);

    iced::application(
        move || ResultViewer::new(handle.clone()),
        ResultViewer::update,
        ResultViewer::view,
    )
    .title(move |_state: &ResultViewer| title.clone())
    .subscription(ResultViewer::subscription)
    .theme(|_state: &ResultViewer| Theme::Dark)
    .window_size(size)
    .run()
}
