use std::time::{
    Duration,
    Instant,
};

/// Horizontal gap between cards, in points. Matches the track layout.
pub const CARD_GAP: f32 = 28.0;

/// Minimum pointer travel for a drag to commit a slide change.
pub const DRAG_THRESHOLD: f32 = 50.0;

/// Quiescent period before a width change is committed.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// How many cards are visible at once for a given track width.
pub fn page_size_for_width(width: f32) -> usize {
    if width <= 380.0 {
        1
    } else if width <= 576.0 {
        1
    } else if width <= 768.0 {
        2
    } else if width <= 1024.0 {
        3
    } else {
        4
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Next,
    Prev,
    GoTo(isize),
    ResizeCommit(f32),
    DragStart(f32),
    DragMove(f32),
    DragEnd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    start_x: f32,
    prev_translate: f32,
    current_translate: f32,
}

/// Slide-index bookkeeping for one carousel instance.
///
/// Everything here is plain arithmetic over the command set; the egui side
/// only reads offsets back out. All mutations clamp `current_slide` into
/// `[0, max_slide]`, so no command can leave the state out of range.
#[derive(Debug)]
pub struct CarouselState {
    card_count: usize,
    page_size: usize,
    current_slide: usize,
    track_width: f32,
    drag: Option<DragSession>,
}

impl CarouselState {
    pub fn new(card_count: usize, track_width: f32) -> Self {
        Self {
            card_count,
            page_size: page_size_for_width(track_width),
            current_slide: 0,
            track_width,
            drag: None,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Prev => self.prev(),
            Command::GoTo(index) => self.go_to(index),
            Command::ResizeCommit(width) => self.resize_commit(width),
            Command::DragStart(x) => self.drag_start(x),
            Command::DragMove(x) => self.drag_move(x),
            Command::DragEnd => self.drag_end(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn max_slide(&self) -> usize {
        self.card_count.saturating_sub(self.page_size)
    }

    pub fn dot_count(&self) -> usize {
        self.max_slide() + 1
    }

    pub fn can_prev(&self) -> bool {
        self.current_slide > 0
    }

    pub fn can_next(&self) -> bool {
        self.current_slide < self.max_slide()
    }

    /// Width of a single card given the committed track width.
    ///
    /// Cards are homogeneous: one width, derived from the track, shared by
    /// every card. Zero cards degenerate to zero.
    pub fn card_width(&self) -> f32 {
        if self.card_count == 0 {
            return 0.0;
        }
        let gaps = CARD_GAP * (self.page_size.saturating_sub(1)) as f32;
        ((self.track_width - gaps) / self.page_size as f32).max(0.0)
    }

    /// Pixel distance the track is shifted left at the committed slide.
    pub fn track_offset(&self) -> f32 {
        self.current_slide as f32 * (self.card_width() + CARD_GAP)
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.current_slide += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.current_slide -= 1;
        }
    }

    pub fn go_to(&mut self, index: isize) {
        let clamped = index.clamp(0, self.max_slide() as isize);
        self.current_slide = clamped as usize;
    }

    /// Recompute the page size for a new track width and clamp the slide
    /// back into range. Position is preserved when it still fits.
    pub fn resize_commit(&mut self, width: f32) {
        self.track_width = width;
        self.page_size = page_size_for_width(width);
        self.current_slide = self.current_slide.min(self.max_slide());
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Raw track translation while a drag session is live.
    pub fn drag_translate(&self) -> Option<f32> {
        self.drag.map(|d| d.current_translate)
    }

    pub fn drag_start(&mut self, x: f32) {
        let translate = -self.track_offset();
        self.drag =
            Some(DragSession { start_x: x, prev_translate: translate, current_translate: translate });
    }

    pub fn drag_move(&mut self, x: f32) {
        if let Some(drag) = &mut self.drag {
            drag.current_translate = drag.prev_translate + (x - drag.start_x);
        }
    }

    /// Ends the drag session. Travel past the threshold commits exactly one
    /// step in the drag direction; anything less snaps back.
    pub fn drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        let moved_by = drag.current_translate - drag.prev_translate;
        if moved_by.abs() > DRAG_THRESHOLD {
            if moved_by < 0.0 {
                self.next();
            } else {
                self.prev();
            }
        }
    }
}

/// Coalesces a burst of width changes into one commit.
///
/// A newer observation supersedes a pending one, so only the last width in
/// a burst survives. Time is passed in so tests don't have to sleep.
#[derive(Debug, Default)]
pub struct ResizeDebounce {
    pending: Option<(f32, Instant)>,
}

impl ResizeDebounce {
    pub fn observe(&mut self, width: f32, now: Instant) {
        self.pending = Some((width, now + RESIZE_DEBOUNCE));
    }

    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        match self.pending {
            Some((width, deadline)) if now >= deadline => {
                self.pending = None;
                Some(width)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }
}
