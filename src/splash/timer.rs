use std::time::Duration;

use flume::Sender;
use tokio::time::Instant;
use tracing::info;

use crate::{event::events::Event, splash::state::LoadingState, util::task::TaskManager};

pub const SPLASH_TASK: &str = "splash";
pub const SPLASH_DURATION: Duration = Duration::from_millis(5000);
pub const DOT_PERIOD: Duration = Duration::from_millis(500);

/// Fixed-length loading phase shown before the deck.
///
/// The countdown and the dot tick share one task registered under
/// [`SPLASH_TASK`], so aborting it (on finish or teardown) stops both.
/// On the instant both are due, the countdown wins.
#[derive(Debug)]
pub struct SplashTimer {
    state: LoadingState,
    duration: Duration,
    dot_period: Duration,
}

impl Default for SplashTimer {
    fn default() -> Self {
        Self::new(SPLASH_DURATION, DOT_PERIOD)
    }
}

impl SplashTimer {
    pub fn new(duration: Duration, dot_period: Duration) -> Self {
        Self {
            state: LoadingState::default(),
            duration,
            dot_period,
        }
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn start(&self, tasks: &mut TaskManager, event_tx: Sender<Event>) {
        if !self.state.is_loading {
            return;
        }

        let start = Instant::now();
        let duration = self.duration;
        let period = self.dot_period;

        tasks.spawn(
            SPLASH_TASK,
            tokio::spawn(async move {
                let deadline = tokio::time::sleep_until(start + duration);
                tokio::pin!(deadline);
                let mut dots = tokio::time::interval_at(start + period, period);

                loop {
                    tokio::select! {
                        biased;
                        _ = &mut deadline => {
                            let _ = event_tx.send(Event::SplashFinished);
                            break;
                        }
                        _ = dots.tick() => {
                            if event_tx.send(Event::SplashTick).is_err() {
                                break;
                            }
                        }
                    }
                }
            }),
        );
    }

    pub fn on_tick(&mut self) {
        self.state.tick();
    }

    pub fn on_finished(&mut self, tasks: &mut TaskManager) {
        if self.state.finish() {
            info!("Splash finished");
        }
        tasks.abort(SPLASH_TASK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(splash: &mut SplashTimer, tasks: &mut TaskManager, event: Event) {
        match event {
            Event::SplashTick => splash.on_tick(),
            Event::SplashFinished => splash.on_finished(tasks),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_dot_after_one_period() {
        let (tx, rx) = flume::unbounded();
        let mut tasks = TaskManager::new();
        let mut splash = SplashTimer::default();
        splash.start(&mut tasks, tx);

        assert!(splash.is_loading());
        assert_eq!(splash.state().dots(), "");

        tokio::time::advance(Duration::from_millis(499)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(rx.try_recv().is_err());
        assert_eq!(splash.state().dots(), "");

        tokio::time::advance(Duration::from_millis(1)).await;
        let event = rx.recv_async().await.unwrap();
        assert_eq!(event, Event::SplashTick);
        apply(&mut splash, &mut tasks, event);
        assert_eq!(splash.state().dots(), ".");
    }

    #[tokio::test(start_paused = true)]
    async fn full_timeline() {
        let (tx, rx) = flume::unbounded();
        let mut tasks = TaskManager::new();
        let mut splash = SplashTimer::default();
        let start = Instant::now();
        splash.start(&mut tasks, tx);

        let mut timeline = Vec::new();
        while splash.is_loading() {
            let event = rx.recv_async().await.unwrap();
            let at = start.elapsed().as_millis();
            apply(&mut splash, &mut tasks, event);
            timeline.push((at, splash.state().dots(), splash.is_loading()));
        }

        assert_eq!(timeline[0], (500, ".", true));
        assert_eq!(timeline[1], (1000, "..", true));
        assert_eq!(timeline[2], (1500, "...", true));
        assert_eq!(timeline[3], (2000, "", true));
        assert_eq!(timeline.len(), 10);
        assert_eq!(timeline[9].0, 5000);
        assert!(!timeline[9].2);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
        assert!(!tasks.is_running(SPLASH_TASK));
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_stops_timers() {
        let (tx, rx) = flume::unbounded();
        let mut tasks = TaskManager::new();
        let splash = SplashTimer::default();
        splash.start(&mut tasks, tx);
        drop(tasks);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
        assert!(splash.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn finished_splash_does_not_restart() {
        let (tx, rx) = flume::unbounded();
        let mut tasks = TaskManager::new();
        let mut splash = SplashTimer::default();
        splash.on_finished(&mut tasks);
        splash.start(&mut tasks, tx);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
        assert!(!tasks.is_running(SPLASH_TASK));
    }
}
