use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Element, Font, Length, alignment, font};

use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::contact::{
    ContactField, ContactIntent, ContactStatus, ContactViewModel,
};

const TITLE: &str = "Send Us a Message";
const TITLE_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 14.0;
const ERROR_SIZE: f32 = 12.0;
const INPUT_PADDING: f32 = 10.0;
const CARD_PADDING: f32 = 28.0;
const FORM_MAX_WIDTH: f32 = 560.0;

/// Props for the contact form card.
#[derive(Clone, Copy)]
pub(crate) struct InquiryFormProps<'a> {
    pub(crate) vm: ContactViewModel<'a>,
    pub(crate) height: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the four inputs, the submit button and the status line.
pub(crate) fn view(props: InquiryFormProps<'_>) -> Element<'_, ContactIntent> {
    let theme = props.theme;
    let palette = theme.palette();

    let title = text(TITLE)
        .size(TITLE_SIZE)
        .font(Font {
            weight: font::Weight::Medium,
            ..Font::DEFAULT
        })
        .color(theme.fade(palette.gray_800));

    let fields = ContactField::ALL
        .into_iter()
        .fold(column![].spacing(12), |fields, field| {
            fields.push(field_input(props, field))
        });

    let submitting = props.vm.is_submitting();
    let label = if submitting { "Sending..." } else { "Send Message" };
    let mut submit = button(text(label).size(16))
        .padding([10.0, 28.0])
        .style(style::primary_button_style(theme, !submitting));
    if !submitting {
        submit = submit.on_press(ContactIntent::Submit);
    }

    let form = column![title, fields, submit, status_line(props)]
        .spacing(16)
        .max_width(FORM_MAX_WIDTH);

    container(form)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .padding(CARD_PADDING)
        .align_x(alignment::Horizontal::Center)
        .style(style::card_style(theme, false))
        .into()
}

fn field_input(
    props: InquiryFormProps<'_>,
    field: ContactField,
) -> Element<'_, ContactIntent> {
    let theme = props.theme;
    let palette = theme.palette();
    let error = props.vm.error(field);

    let label = text(field.label())
        .size(LABEL_SIZE)
        .color(theme.fade(palette.gray_700));

    let mut input =
        text_input(field.placeholder(), props.vm.draft.value(field))
            .padding(INPUT_PADDING)
            .style(style::text_input_style(theme, error.is_some()));
    if !props.vm.is_submitting() {
        input = input
            .on_input(move |value| ContactIntent::FieldChanged(field, value))
            .on_submit(ContactIntent::Submit);
    }

    let hint: Element<'_, ContactIntent> = match error {
        Some(message) => text(message)
            .size(ERROR_SIZE)
            .color(theme.fade(palette.danger))
            .into(),
        None => Space::new().height(Length::Fixed(ERROR_SIZE)).into(),
    };

    column![label, input, hint].spacing(4).into()
}

fn status_line(props: InquiryFormProps<'_>) -> Element<'_, ContactIntent> {
    let theme = props.theme;
    let palette = theme.palette();

    match props.vm.status {
        ContactStatus::Sent => {
            text("Thank you! Your message has been sent.")
                .size(LABEL_SIZE)
                .color(theme.fade(palette.success))
                .into()
        },
        ContactStatus::Failed(message) => {
            text(format!("Could not send your message: {message}"))
                .size(LABEL_SIZE)
                .color(theme.fade(palette.danger))
                .into()
        },
        ContactStatus::Idle | ContactStatus::Submitting => {
            Space::new().height(Length::Fixed(LABEL_SIZE)).into()
        },
    }
}
