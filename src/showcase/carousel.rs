use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Time each use case stays on screen.
pub(crate) const ROTATION_PERIOD: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UseCase {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) const USE_CASES: [UseCase; 4] = [
    UseCase {
        title: "Flight Tracking",
        description: "Detailed logs of your flights with route visualization and stats.",
    },
    UseCase {
        title: "Performance Analysis",
        description: "Track your performance metrics across flights to identify improvement areas.",
    },
    UseCase {
        title: "Logbook Management",
        description: "Digital logbook that meets FAA requirements with automatic calculations.",
    },
    UseCase {
        title: "Aviation Community",
        description: "Connect with other pilots and share your flying experiences.",
    },
];

/// Landing page carousel, cycles through the use cases.
#[derive(Debug)]
pub(crate) struct UseCaseCarousel {
    entries: &'static [UseCase],
    index: usize,
}

impl Default for UseCaseCarousel {
    fn default() -> Self { Self::new(&USE_CASES) }
}

impl UseCaseCarousel {
    pub(crate) fn new(entries: &'static [UseCase]) -> Self { Self { entries, index: 0 } }

    pub(crate) fn index(&self) -> usize { self.index }

    pub(crate) fn current(&self) -> Option<&UseCase> { self.entries.get(self.index) }

    /// Moves to the next entry, wrapping to the first after the last.
    pub(crate) fn advance(&mut self) {
        if !self.entries.is_empty() {
            self.index = (self.index + 1) % self.entries.len();
        }
    }

    /// Jumps to `index`. Out of range indices are ignored.
    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Title, description and a dot per entry with the current one filled.
    pub(crate) fn render(&self) -> String {
        let Some(current) = self.current() else { return String::new() };
        let dots: String = (0..self.entries.len())
            .map(|i| if i == self.index { '●' } else { '○' })
            .collect();
        format!("{}\n{}\n{dots}", current.title, current.description)
    }

    /// Advances every `period` until `cancel` fires, calling `on_change` after each step.
    pub(crate) async fn run<F>(&mut self, period: Duration, cancel: CancellationToken, mut on_change: F)
    where F: FnMut(&Self) {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    self.advance();
                    on_change(self);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_after_last_entry() {
        let mut carousel = UseCaseCarousel::default();
        let titles: Vec<_> = (0..5)
            .map(|_| {
                carousel.advance();
                carousel.current().unwrap().title
            })
            .collect();
        assert_eq!(
            titles,
            vec!["Performance Analysis", "Logbook Management", "Aviation Community", "Flight Tracking", "Performance Analysis"]
        );
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut carousel = UseCaseCarousel::default();
        assert!(carousel.select(2));
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.select(4));
        assert_eq!(carousel.index(), 2);
        assert!(carousel.render().ends_with("○○●○"));
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = UseCaseCarousel::new(&[]);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
        assert_eq!(carousel.render(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn run_advances_once_per_period() {
        let mut carousel = UseCaseCarousel::default();
        let cancel = CancellationToken::new();
        let stop = cancel.clone();
        let start = tokio::time::Instant::now();
        let mut seen = Vec::new();
        carousel
            .run(ROTATION_PERIOD, cancel, |c| {
                seen.push((c.index(), start.elapsed().as_secs()));
                if seen.len() == 5 {
                    stop.cancel();
                }
            })
            .await;
        assert_eq!(seen, vec![(1, 15), (2, 30), (3, 45), (0, 60), (1, 75)]);
    }
}
