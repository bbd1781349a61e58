//! Card image selection
//!
//! Rodents and fish have one picture each. Dogs, cats and birds have two,
//! and the card shows one of them at random. The random choice goes through
//! an [`ImageSelector`] so callers can make it deterministic.

use std::collections::VecDeque;

use crate::models::Category;

pub const RODENT_IMAGES: [&str; 1] = ["Hamster.jpg"];
pub const FISH_IMAGES: [&str; 1] = ["fish.jpg"];

/// Indexed by the selector's pick: 0 or 1
pub const DOG_IMAGES: [&str; 2] = ["dog1.jpg", "dog.jpg"];
pub const CAT_IMAGES: [&str; 2] = ["Cat2.jpg", "cat.jpg"];
pub const BIRD_IMAGES: [&str; 2] = ["bird.PNG", "bird.jpg"];

/// Source of the random index used to pick between alternative images
pub trait ImageSelector {
    /// Return a value in `0..range`
    fn pick(&mut self, range: u32) -> u32;
}

impl<F: FnMut(u32) -> u32> ImageSelector for F {
    fn pick(&mut self, range: u32) -> u32 {
        self(range)
    }
}

/// Uniform choice backed by the platform's random source
/// (`crypto.getRandomValues` in the browser).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl ImageSelector for RandomSelector {
    fn pick(&mut self, range: u32) -> u32 {
        if range <= 1 {
            return 0;
        }

        let mut buf = [0u8; 4];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u32::from_le_bytes(buf) % range,
            Err(err) => {
                log::warn!("Random source unavailable ({}), using first image", err);
                0
            }
        }
    }
}

/// Always picks the same index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSelector(pub u32);

impl ImageSelector for FixedSelector {
    fn pick(&mut self, range: u32) -> u32 {
        if range == 0 {
            0
        } else {
            self.0 % range
        }
    }
}

/// Replays a scripted sequence of picks and records every request
///
/// Once the script runs out every pick is 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    picks: VecDeque<u32>,
    requests: Vec<u32>,
}

impl ScriptedSelector {
    pub fn new<I: IntoIterator<Item = u32>>(picks: I) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Ranges passed to `pick`, in call order
    pub fn requests(&self) -> &[u32] {
        &self.requests
    }
}

impl ImageSelector for ScriptedSelector {
    fn pick(&mut self, range: u32) -> u32 {
        self.requests.push(range);
        let value = self.picks.pop_front().unwrap_or(0);
        if range == 0 {
            0
        } else {
            value % range
        }
    }
}

/// Every image a category may show
pub fn image_choices(category: Category) -> &'static [&'static str] {
    match category {
        Category::Rodent => &RODENT_IMAGES,
        Category::Fish => &FISH_IMAGES,
        Category::Dog => &DOG_IMAGES,
        Category::Cat => &CAT_IMAGES,
        Category::Bird => &BIRD_IMAGES,
    }
}

/// Pick the image file name for a card.
///
/// The selector is only consulted for categories with more than one image.
pub fn image_for<S: ImageSelector + ?Sized>(category: Category, selector: &mut S) -> &'static str {
    let choices = image_choices(category);
    if choices.len() == 1 {
        return choices[0];
    }

    let index = selector.pick(choices.len() as u32) as usize;
    choices[index % choices.len()]
}
