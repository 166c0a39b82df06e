//! Root-level view composition.
//!
//! The landing page is one tall scrollable column; the gallery swaps
//! it out wholesale. Chrome (navbar, menu, scroll-to-top) and the
//! dismissable surfaces (booking dialog, lightbox, toasts) stack on
//! top in z-order.

use iced::widget::{
    center, column, container, mouse_area, opaque, scrollable, stack,
};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::contact::views as contact_views;
use crate::domains::gallery::views as gallery_views;
use crate::domains::rooms::views::{booking_dialog, listing, showcase};
use crate::domains::ui::views::{
    about, footer, hero, navbar, scroll_top, toast_overlay,
};
use crate::domains::ui::{self, ViewId};
use crate::domains::{gallery, rooms};
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let ui = &state.domains.ui.state;

    let page: Element<'_, DomainMessage> = match ui.current_view {
        ViewId::Landing => landing(state),
        ViewId::Gallery => {
            gallery_views::page(&state.domains.gallery.state)
        }
    };

    let mut layers = stack![page, navbar::view(ui)];

    if ui.mobile_menu_open && ui.mobile_layout() {
        layers = layers.push(navbar::view_mobile_menu());
    }

    if ui.show_scroll_top() {
        layers = layers.push(scroll_top::view());
    }

    let mut screen: Element<'_, DomainMessage> =
        layers.width(Length::Fill).height(Length::Fill).into();

    // Dismissable surfaces, bottom to top: dialog, lightbox, toasts.
    if let Some(form) = &state.domains.rooms.state.booking {
        screen = overlay(
            screen,
            booking_dialog::view(form),
            rooms::Message::CloseBookingDialog.into(),
            theme::Container::ModalOverlay,
        );
    }

    if let Some(lightbox) =
        gallery_views::lightbox_content(&state.domains.gallery.state)
    {
        screen = overlay(
            screen,
            lightbox,
            gallery::Message::CloseLightbox.into(),
            theme::Container::Lightbox,
        );
    }

    if !ui.toasts.is_empty() {
        screen = stack![screen, toast_overlay::view(&ui.toasts)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    screen
}

fn landing(state: &State) -> Element<'_, DomainMessage> {
    let ui = &state.domains.ui.state;
    let rooms = &state.domains.rooms.state;
    let contact = &state.domains.contact.state;

    let sections = column![
        hero::view(ui),
        about::view(ui),
        showcase::view(rooms, ui),
        listing::view(rooms, ui),
        contact_views::view(contact, ui),
        footer::view(ui),
    ]
    .width(Length::Fill);

    let body = scrollable(sections)
        .id(ui::landing_scroll_id())
        .on_scroll(|viewport| {
            ui::Message::LandingScrolled(viewport.absolute_offset())
                .into()
        })
        .width(Length::Fill)
        .height(Length::Fill);

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::Page.style())
        .into()
}

/// Center `content` over `base` behind a dimmed backdrop; clicking the
/// backdrop (but not the content) emits `on_blur`.
fn overlay<'a>(
    base: Element<'a, DomainMessage>,
    content: Element<'a, DomainMessage>,
    on_blur: DomainMessage,
    backdrop: theme::Container,
) -> Element<'a, DomainMessage> {
    stack![
        base,
        opaque(
            mouse_area(
                center(opaque(content)).style(backdrop.style())
            )
            .on_press(on_blur)
        )
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
