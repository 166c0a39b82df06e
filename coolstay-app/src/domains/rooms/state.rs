//! Rooms domain state.

use std::collections::HashMap;

use coolstay_model::{ImageSource, Room, RoomId};
use iced::widget::image;

use super::booking::BookingForm;
use super::carousel::Carousel;
use crate::content::{self, ShowcaseSlide};

#[derive(Debug)]
pub struct RoomsState {
    pub rooms: Vec<Room>,
    pub slides: Vec<ShowcaseSlide>,
    pub showcase: Carousel,
    /// One image cursor per listing card.
    pub card_carousels: HashMap<RoomId, Carousel>,
    pub hovered_card: Option<RoomId>,
    /// `Some` while the booking dialog is open.
    pub booking: Option<BookingForm>,
    /// Loaded imagery keyed by [`ImageSource::key`].
    pub images: HashMap<String, image::Handle>,
}

impl RoomsState {
    pub fn new() -> Self {
        let rooms = content::rooms();
        let slides = content::showcase_slides();

        let card_carousels = rooms
            .iter()
            .map(|room| (room.id, Carousel::new(room.images.len())))
            .collect();

        Self {
            showcase: Carousel::new(slides.len()),
            card_carousels,
            rooms,
            slides,
            hovered_card: None,
            booking: None,
            images: HashMap::new(),
        }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Current image index for a card; 0 for unknown rooms.
    pub fn card_index(&self, id: RoomId) -> usize {
        self.card_carousels
            .get(&id)
            .map(Carousel::current)
            .unwrap_or(0)
    }

    pub fn image(&self, source: &ImageSource) -> Option<&image::Handle> {
        self.images.get(source.key())
    }

    pub fn dialog_open(&self) -> bool {
        self.booking.is_some()
    }

    /// The showcase timer only runs while the dialog is closed.
    pub fn showcase_may_advance(&self) -> bool {
        !self.dialog_open() && self.showcase.len() > 1
    }

    /// The card timer only runs while a card is actually hovered.
    pub fn card_may_advance(&self) -> bool {
        self.hovered_card.is_some()
    }
}

impl Default for RoomsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_room_gets_an_image_cursor() {
        let state = RoomsState::new();
        for room in &state.rooms {
            assert!(state.card_carousels.contains_key(&room.id));
            assert_eq!(
                state.card_carousels[&room.id].len(),
                room.images.len()
            );
        }
    }

    #[test]
    fn advance_gates_follow_dialog_and_hover() {
        let mut state = RoomsState::new();
        assert!(state.showcase_may_advance());
        assert!(!state.card_may_advance());

        state.hovered_card = state.rooms.first().map(|room| room.id);
        assert!(state.card_may_advance());

        let room = state.rooms[0].clone();
        state.booking = Some(BookingForm::for_room(&room));
        assert!(!state.showcase_may_advance());
    }
}
