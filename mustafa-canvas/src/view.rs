use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent, PAGE_SCROLL_ID};
use crate::components::primitive::section_frame::{self, SectionFrameProps};
use crate::components::primitive::section_heading::{
    self, SectionHeadingProps,
};
use crate::components::sections::PageLink;
use crate::components::sections::about::{self, AboutProps};
use crate::components::sections::contact_details::{
    self, ContactDetailsProps,
};
use crate::components::sections::footer::{self, FooterProps};
use crate::components::sections::hero::{self, HeroProps};
use crate::content::{
    ARTIST_PHOTO, CONTACT_TITLE, GALLERY_TITLE, LOGO_MARK, SectionId,
};
use crate::layout;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::contact::ContactEvent;
use crate::widgets::contact::view::inquiry_form::{self, InquiryFormProps};
use crate::widgets::gallery::view::grid::{self, GridProps};
use crate::widgets::navigation::view::header::{self, HeaderProps};
use crate::widgets::navigation::view::mobile_menu::{self, MobileMenuProps};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

const SECTION_PADDING_X: f32 = 24.0;
const CONTACT_MAX_WIDTH: f32 = 896.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::new(&app.theme);
    let page_layout = app.state.layout();
    let breakpoint = page_layout.breakpoint();
    let metrics = page_layout.sections();
    let reveal = app.widgets.reveal.vm();
    let nav_vm = app.widgets.navigation.vm(
        app.widgets.tracker.active_section(),
        breakpoint.is_mobile(),
    );
    let header_height = layout::header_height(breakpoint);

    let header = header::view(HeaderProps {
        vm: nav_vm,
        logo: app.assets.handle(LOGO_MARK),
        motion: reveal.header,
        height: header_height,
        theme,
    })
    .map(navigation_intent);

    let hero = hero::view(HeroProps {
        motion: reveal.section(SectionId::Hero),
        height: page_layout.section_height(SectionId::Hero),
        metrics,
        breakpoint,
        theme,
    })
    .map(page_link);

    let about = about::view(AboutProps {
        motion: reveal.section(SectionId::About),
        height: page_layout.section_height(SectionId::About),
        metrics,
        wide: breakpoint.wide(),
        photo: app.assets.handle(ARTIST_PHOTO),
        theme,
    });

    let page = column![
        hero,
        about,
        view_gallery(app, theme),
        view_contact(app, theme),
        footer::view(FooterProps {
            copyright: &app.copyright,
            height: page_layout.footer_height(),
            stacked: breakpoint.is_mobile(),
            theme,
        })
        .map(page_link),
    ]
    .width(Length::Fill);

    let body = scrollable(page)
        .id(PAGE_SCROLL_ID)
        .on_scroll(AppEvent::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let base = column![header, body]
        .width(Length::Fill)
        .height(Length::Fill);

    if nav_vm.shows_mobile_menu() {
        let menu = mobile_menu::view(MobileMenuProps {
            vm: nav_vm,
            top: header_height,
            theme,
        })
        .map(navigation_intent);
        stack![base, menu].into()
    } else {
        base.into()
    }
}

fn view_gallery<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let page_layout = app.state.layout();
    let metrics = page_layout.sections();
    let motion = app.widgets.reveal.vm().section(SectionId::Gallery);
    let theme = theme.with_opacity(motion.opacity);

    let heading = section_heading::view(SectionHeadingProps {
        title: GALLERY_TITLE,
        wide: page_layout.breakpoint().wide(),
        height: metrics.heading_height,
        theme,
    });

    let cards = grid::view(GridProps {
        vm: app.widgets.gallery.vm(),
        metrics: page_layout.gallery(),
        assets: &app.assets,
        theme,
    })
    .map(AppEvent::Gallery);

    section_frame::view(
        SectionFrameProps {
            motion,
            height: page_layout.section_height(SectionId::Gallery),
            padding_x: SECTION_PADDING_X,
            padding_y: metrics.padding_y,
            background: theme.palette().white,
        },
        column![heading, cards],
    )
}

fn view_contact<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let page_layout = app.state.layout();
    let metrics = page_layout.sections();
    let motion = app.widgets.reveal.vm().section(SectionId::Contact);
    let theme = theme.with_opacity(motion.opacity);

    let heading = section_heading::view(SectionHeadingProps {
        title: CONTACT_TITLE,
        wide: page_layout.breakpoint().wide(),
        height: metrics.heading_height,
        theme,
    });

    let details = contact_details::view(ContactDetailsProps {
        height: metrics.contact_details_height,
        theme,
    })
    .map(page_link);

    let form = inquiry_form::view(InquiryFormProps {
        vm: app.widgets.contact.vm(),
        height: metrics.contact_form_height,
        theme,
    })
    .map(|intent| AppEvent::Contact(ContactEvent::Intent(intent)));

    let content = container(
        column![
            heading,
            details,
            Space::new().height(Length::Fixed(metrics.contact_gap)),
            form,
        ]
        .max_width(CONTACT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    section_frame::view(
        SectionFrameProps {
            motion,
            height: page_layout.section_height(SectionId::Contact),
            padding_x: SECTION_PADDING_X,
            padding_y: metrics.padding_y,
            background: theme.palette().gray_50,
        },
        content,
    )
}

fn navigation_intent(intent: NavigationIntent) -> AppEvent {
    AppEvent::Navigation(NavigationEvent::Intent(intent))
}

fn page_link(link: PageLink) -> AppEvent {
    match link {
        PageLink::Section(section) => {
            navigation_intent(NavigationIntent::Navigate(section))
        },
        PageLink::External(uri) => AppEvent::OpenLink(uri),
    }
}
