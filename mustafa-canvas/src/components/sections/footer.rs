use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Border, Element, Font, Length, alignment, font};

use super::PageLink;
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::content::{
    BRAND_INITIAL, BRAND_NAME, BUSINESS_HOURS, ContactDetail, EMAIL, FOOTER_BLURB, HOURS_TITLE, LOCATION, PHONE, QUICK_LINKS_TITLE,
    SOCIAL_LINKS, SOCIAL_TITLE, SectionId,
};
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;

const CONTENT_MAX_WIDTH: f32 = 1152.0;
const HORIZONTAL_PADDING: f32 = 24.0;
const TOP_PADDING: f32 = 48.0;
const BOTTOM_PADDING: f32 = 24.0;
const TILE_SIZE: f32 = 40.0;
const TILE_RADIUS: f32 = 6.0;
const DETAIL_ICON_SIZE: f32 = 16.0;
const SOCIAL_BUTTON_SIZE: f32 = 36.0;
const SOCIAL_ICON_SIZE: f32 = 20.0;

/// Props for the page footer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FooterProps<'a> {
    pub(crate) copyright: &'a str,
    pub(crate) height: f32,
    /// Brand and links columns stack vertically.
    pub(crate) stacked: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render brand recap, contact lines, social links, quick links, business
/// hours and the copyright line.
pub(crate) fn view(props: FooterProps<'_>) -> Element<'_, PageLink> {
    let theme = props.theme;
    let palette = theme.palette();

    let brand = brand_column(props);
    let links = links_column(props);

    let columns: Element<'_, PageLink> = if props.stacked {
        column![brand, links].spacing(40).into()
    } else {
        row![
            container(brand).width(Length::FillPortion(1)),
            container(links).width(Length::FillPortion(1)),
        ]
        .spacing(64)
        .into()
    };

    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(style::surface_style(theme.fade(palette.gray_800)));

    let copyright = container(
        text(props.copyright)
            .size(14)
            .color(theme.fade(palette.gray_400)),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let content = column![
        columns,
        Space::new().height(Length::Fill),
        divider,
        copyright
    ]
    .spacing(24)
    .max_width(CONTENT_MAX_WIDTH);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .padding(iced::Padding {
            top: TOP_PADDING,
            bottom: BOTTOM_PADDING,
            left: HORIZONTAL_PADDING,
            right: HORIZONTAL_PADDING,
        })
        .align_x(alignment::Horizontal::Center)
        .style(style::surface_style(theme.fade(palette.gray_900)))
        .into()
}

fn brand_column(props: FooterProps<'_>) -> Element<'_, PageLink> {
    let theme = props.theme;
    let palette = theme.palette();
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };
    let accent = theme.fade(palette.accent);

    let tile = container(
        text(BRAND_INITIAL)
            .size(16)
            .font(bold)
            .color(theme.fade(palette.white)),
    )
    .width(Length::Fixed(TILE_SIZE))
    .height(Length::Fixed(TILE_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(accent.into()),
        border: Border {
            radius: TILE_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let title = row![
        tile,
        text(BRAND_NAME)
            .size(20)
            .font(bold)
            .color(theme.fade(palette.white)),
    ]
    .spacing(12)
    .align_y(alignment::Vertical::Center);

    let blurb = text(FOOTER_BLURB)
        .size(14)
        .line_height(1.6)
        .color(theme.fade(palette.gray_300));

    let details = [
        (icons::MAIL, EMAIL),
        (icons::PHONE, PHONE),
        (icons::MAP_PIN, LOCATION),
    ]
    .into_iter()
    .fold(column![].spacing(12), |details, (icon, detail)| {
        details.push(detail_line(props, icon, detail))
    });

    let social = SOCIAL_LINKS
        .into_iter()
        .filter_map(|link| icons::social(link.name).map(|icon| (icon, link)))
        .fold(row![].spacing(8), |social, (icon, link)| {
            social.push(
                icon_button::view(IconButtonProps {
                    icon,
                    theme,
                    size: SOCIAL_BUTTON_SIZE,
                    icon_size: SOCIAL_ICON_SIZE,
                    on_dark: true,
                })
                .map(move |_| PageLink::External(link.url)),
            )
        });

    column![
        title,
        blurb,
        details,
        text(SOCIAL_TITLE)
            .size(14)
            .color(theme.fade(palette.gray_400)),
        social,
    ]
    .spacing(20)
    .into()
}

fn detail_line<'a>(
    props: FooterProps<'a>,
    icon: &'static [u8],
    detail: ContactDetail,
) -> Element<'a, PageLink> {
    let theme = props.theme;
    let palette = theme.palette();
    let accent = theme.fade(palette.accent);

    let glyph = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(DETAIL_ICON_SIZE))
        .height(Length::Fixed(DETAIL_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(accent),
        });

    let value: Element<'a, PageLink> = match detail.href {
        Some(href) => button(text(detail.value).size(14))
            .padding(0)
            .style(style::link_button_style(theme, palette.gray_300, false))
            .on_press(PageLink::External(href))
            .into(),
        None => text(detail.value)
            .size(14)
            .color(theme.fade(palette.gray_300))
            .into(),
    };

    row![glyph, value]
        .spacing(12)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn links_column(props: FooterProps<'_>) -> Element<'_, PageLink> {
    let theme = props.theme;
    let palette = theme.palette();
    let accent = theme.fade(palette.accent);

    let heading = |label: &'static str, size: f32| {
        text(label)
            .size(size)
            .font(Font {
                weight: font::Weight::Semibold,
                ..Font::DEFAULT
            })
            .color(theme.fade(palette.white))
    };

    let links = SectionId::ALL.into_iter().fold(
        column![].spacing(12),
        |links, section| {
            let chevron =
                svg::Svg::new(svg::Handle::from_memory(icons::CHEVRON_RIGHT))
                    .width(Length::Fixed(DETAIL_ICON_SIZE))
                    .height(Length::Fixed(DETAIL_ICON_SIZE))
                    .style(move |_, _| svg::Style {
                        color: Some(accent),
                    });
            let label = row![chevron, text(section.label()).size(14)]
                .spacing(8)
                .align_y(alignment::Vertical::Center);

            links.push(
                button(label)
                    .padding(0)
                    .style(style::link_button_style(
                        theme,
                        palette.gray_300,
                        false,
                    ))
                    .on_press(PageLink::Section(section)),
            )
        },
    );

    let hours = BUSINESS_HOURS.into_iter().fold(
        column![heading(HOURS_TITLE, 14.0)].spacing(6),
        |hours, line| {
            hours.push(text(line).size(14).color(theme.fade(palette.gray_300)))
        },
    );

    column![heading(QUICK_LINKS_TITLE, 18.0), links, hours]
        .spacing(24)
        .into()
}

#[cfg(test)]
mod tests {
    use super::{FooterProps, view};
    use crate::content::copyright_line;
    use crate::shared::ui::theme::{SiteTheme, ThemeProps};

    #[test]
    fn given_copyright_line_when_footer_built_then_both_layouts_render() {
        let theme = SiteTheme::default();
        let copyright = copyright_line(2026);

        for stacked in [false, true] {
            let _footer = view(FooterProps {
                copyright: &copyright,
                height: 480.0,
                stacked,
                theme: ThemeProps::new(&theme),
            });
        }
    }
}
