use super::*;
use crate::gesture::Color;
use crate::judge::Phase;
use crate::judge::Round;
use crate::link::Command;
use crate::link::Link;
use crate::vision::Camera;
use crate::vision::Sample;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One game from `START` to `END`.
///
/// Single-threaded and blocking: each iteration of a round takes one sample
/// from the camera, classifies it, and steps the round's judge. The quit
/// check is polled once per sample.
pub struct Session {
    settings: Settings,
    camera: Box<dyn Camera>,
    link: Box<dyn Link>,
    clock: Box<dyn Clock>,
    rng: SmallRng,
    quit: Box<dyn Fn() -> bool>,
    board: Scoreboard,
}

impl Session {
    pub fn new<C, L>(settings: Settings, camera: C, link: L) -> Self
    where
        C: Camera + 'static,
        L: Link + 'static,
    {
        Self {
            board: Scoreboard::new(settings.rounds),
            settings,
            camera: Box::new(camera),
            link: Box::new(link),
            clock: Box::new(Wall::default()),
            rng: SmallRng::from_os_rng(),
            quit: Box::new(crate::interrupted),
        }
    }
    pub fn with_clock<K>(mut self, clock: K) -> Self
    where
        K: Clock + 'static,
    {
        self.clock = Box::new(clock);
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }
    pub fn with_quit<F>(mut self, quit: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.quit = Box::new(quit);
        self
    }
    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Play every round unless the operator quits, then close the
    /// controller session either way.
    pub fn run(&mut self) -> Summary {
        log::info!("[session] {}", self.settings);
        println!("Type 'q' + Enter to quit.");
        println!(
            "Starting game: {} colours | window={}s",
            self.settings.rounds,
            self.settings.window.as_secs_f32()
        );
        self.send(Command::Start);
        self.clock.sleep(self.settings.pause);
        let aborted = self.rounds();
        if !aborted {
            self.clock.sleep(self.settings.pause);
        }
        let summary = self.board.summary(aborted);
        println!();
        println!("{}", summary);
        log::info!("[session] {}", summary);
        self.shutdown();
        summary
    }

    /// Returns true if the operator quit before the last round finished.
    fn rounds(&mut self) -> bool {
        while !self.board.is_complete() {
            if (self.quit)() {
                return true;
            }
            match self.round() {
                None => return true,
                Some(round) => {
                    println!("{}", self.board.record(&round));
                    log::debug!("[session] {}", round);
                    self.clock.sleep(self.settings.rest);
                }
            }
        }
        false
    }

    /// Flash a colour and sample until the judge reaches a verdict.
    /// Each sample is stamped when the camera returns it, so a frame that
    /// lands after the window closes the round instead of counting.
    /// None if the operator quit mid-round; that round does not count.
    fn round(&mut self) -> Option<Round> {
        let target = self.settings.palette.choose(&mut self.rng);
        let mut round = Round::new(target, self.settings.window, self.settings.streak);
        self.send(Command::Show(target));
        let start = self.clock.now();
        while !round.is_over() {
            if (self.quit)() {
                self.send(Command::Off);
                return None;
            }
            let sample = self.camera.sample();
            let elapsed = self.clock.now().saturating_sub(start);
            let observed = self.observe(sample);
            if round.observe(elapsed, observed) == Phase::Matched {
                log::debug!("[session] {} held for {} samples", target, round.streak().length());
            }
        }
        self.send(Command::Off);
        Some(round)
    }

    /// Colour named by the hand in a sample, if any.
    fn observe(&self, sample: Sample) -> Option<Color> {
        match sample {
            Sample::Missing => None,
            Sample::Empty => None,
            Sample::Hand(ref hand) => {
                let fingers = hand.fingers();
                let color = self.settings.palette.color(fingers);
                log::debug!(
                    "[session] {} hand fingers={} gesture={}",
                    hand.handedness(),
                    fingers,
                    color.map_or(String::from("-"), |c| c.to_string())
                );
                color
            }
        }
    }

    fn shutdown(&mut self) {
        self.send(Command::End);
        self.clock.sleep(self.settings.pause);
        self.send(Command::Off);
    }

    /// Controller faults never stop the game.
    fn send(&mut self, command: Command) {
        if let Err(e) = self.link.send(command) {
            log::warn!("{:#}", e);
        }
    }
}
