use iced::widget::{button, column, container, row, text};
use iced::{Element, Font, Length, alignment, font};

use super::PageLink;
use crate::content::{CONTACT_BLURB, CONTACT_DETAILS, CONTACT_LEAD, ContactDetail};
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;

const CARD_PADDING: f32 = 28.0;
const DETAILS_MAX_WIDTH: f32 = 448.0;
const BLURB_MAX_WIDTH: f32 = 672.0;

/// Props for the "Get In Touch" card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContactDetailsProps<'a> {
    pub(crate) height: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the lead, the blurb and the email/phone/location lines.
pub(crate) fn view(props: ContactDetailsProps<'_>) -> Element<'_, PageLink> {
    let theme = props.theme;
    let palette = theme.palette();

    let lead = text(CONTACT_LEAD)
        .size(20)
        .font(Font {
            weight: font::Weight::Medium,
            ..Font::DEFAULT
        })
        .color(theme.fade(palette.gray_800));

    let blurb = container(
        text(CONTACT_BLURB)
            .size(16)
            .line_height(1.6)
            .color(theme.fade(palette.gray_600))
            .align_x(alignment::Horizontal::Center),
    )
    .max_width(BLURB_MAX_WIDTH);

    let details = CONTACT_DETAILS
        .into_iter()
        .fold(column![].spacing(14), |details, detail| {
            details.push(detail_line(props, detail))
        });

    container(
        column![lead, blurb, container(details).max_width(DETAILS_MAX_WIDTH)]
            .spacing(20)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(props.height))
    .padding(CARD_PADDING)
    .align_x(alignment::Horizontal::Center)
    .style(style::card_style(theme, false))
    .into()
}

fn detail_line(
    props: ContactDetailsProps<'_>,
    detail: ContactDetail,
) -> Element<'_, PageLink> {
    let theme = props.theme;
    let palette = theme.palette();

    let label = text(format!("{}:", detail.label))
        .size(16)
        .font(Font {
            weight: font::Weight::Medium,
            ..Font::DEFAULT
        })
        .color(theme.fade(palette.gray_700));

    let value: Element<'_, PageLink> = match detail.href {
        Some(href) => button(text(detail.value).size(16))
            .padding(0)
            .style(style::link_button_style(theme, palette.accent, false))
            .on_press(PageLink::External(href))
            .into(),
        None => text(detail.value)
            .size(16)
            .color(theme.fade(palette.gray_600))
            .into(),
    };

    row![label, value]
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .into()
}
