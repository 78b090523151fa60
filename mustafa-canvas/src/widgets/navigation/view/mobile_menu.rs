use iced::widget::{Column, Space, button, column, container, text};
use iced::{Element, Length, alignment};

use crate::content::SectionId;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::{NavigationIntent, NavigationViewModel};

const ENTRY_HEIGHT: f32 = 48.0;
const ENTRY_TEXT_SIZE: f32 = 18.0;
const PANEL_PADDING: f32 = 16.0;

/// Props for the collapsed-navigation overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MobileMenuProps<'a> {
    pub(crate) vm: NavigationViewModel,
    /// Distance from the window top to the panel, i.e. the header height.
    pub(crate) top: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the dropdown panel below the header.
pub(crate) fn view(
    props: MobileMenuProps<'_>,
) -> Element<'_, NavigationIntent> {
    let palette = props.theme.palette();

    let entries = SectionId::ALL.into_iter().fold(
        Column::new().width(Length::Fill),
        |entries, section| {
            let is_active = section == props.vm.active_section;
            let label = container(text(section.label()).size(ENTRY_TEXT_SIZE))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center);

            entries.push(
                button(label)
                    .width(Length::Fill)
                    .height(Length::Fixed(ENTRY_HEIGHT))
                    .padding(0)
                    .style(style::link_button_style(
                        props.theme,
                        palette.gray_700,
                        is_active,
                    ))
                    .on_press(NavigationIntent::NavigateFromMenu(section)),
            )
        },
    );

    let panel = container(entries)
        .width(Length::Fill)
        .padding([PANEL_PADDING, 0.0])
        .style(style::header_style(props.theme));

    column![Space::new().height(Length::Fixed(props.top)), panel]
        .width(Length::Fill)
        .into()
}
