use std::{
    cell::{Cell, RefCell},
    time::Duration,
};

use futures_util::future::{AbortHandle, Abortable, Aborted};
use log::{debug, error, info, warn};

use crate::{
    Animator, Camera, Clip, Clock, Countdown, Mode, Phase, Presenter, ProgressService, Sequence,
    SequencerError, Speech, Tick, catalog,
};

pub const TICK: Duration = Duration::from_secs(1);
/// Pause between the end of a phase and the start of the next one.
pub const PHASE_PAUSE: Duration = Duration::from_secs(1);

pub const PHRASE_FINAL_WARNING: &str = "Five seconds.";
pub const PHRASE_DONE: &str = "Done.";
pub const PHRASE_COMPLETE: &str = "Sequence complete. System upgraded.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    /// Index of the running phase.
    Running { phase: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed { reward: u32 },
    Cancelled,
}

struct ActiveRun {
    id: u64,
    sequence: Sequence,
    timer: AbortHandle,
    camera: bool,
}

/// Drives one workout at a time through its warm-up, main and cooldown phases.
///
/// The sequencer is meant to live on a single-threaded event loop: the future returned
/// by [`Sequencer::start`] runs the workout while [`Sequencer::stop`] may be called from
/// any other task.
pub struct Sequencer<E, P> {
    environment: E,
    progress: P,
    active: RefCell<Option<ActiveRun>>,
    runs: Cell<u64>,
}

impl<E, P> Sequencer<E, P>
where
    E: Animator + Presenter + Speech + Camera + Clock,
    P: ProgressService,
{
    pub fn new(environment: E, progress: P) -> Self {
        Self {
            environment,
            progress,
            active: RefCell::new(None),
            runs: Cell::new(0),
        }
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn state(&self) -> State {
        match &*self.active.borrow() {
            Some(run) => State::Running {
                phase: run.sequence.cursor(),
            },
            None => State::Idle,
        }
    }

    /// Copy of the active sequence.
    pub fn sequence(&self) -> Option<Sequence> {
        self.active.borrow().as_ref().map(|run| run.sequence.clone())
    }

    /// Runs the workout until all phases have completed or [`Sequencer::stop`] is called.
    ///
    /// A second workout cannot be started while one is active. Dropping the returned
    /// future cancels the workout.
    pub async fn start(&self, exercise_id: &str) -> Result<Outcome, SequencerError> {
        let exercise = catalog::exercise(exercise_id)
            .ok_or_else(|| SequencerError::UnknownExercise(exercise_id.to_string()))?;

        if self.active.borrow().is_some() {
            return Err(SequencerError::SequenceAlreadyActive);
        }

        let id = self.runs.get() + 1;
        self.runs.set(id);
        let sequence = Sequence::new(exercise, self.progress.level());
        let (timer, registration) = AbortHandle::new_pair();
        info!(
            "starting {} ({} phases, {} s)",
            exercise.id,
            sequence.len(),
            sequence.duration()
        );
        *self.active.borrow_mut() = Some(ActiveRun {
            id,
            sequence,
            timer,
            camera: false,
        });
        let _guard = RunGuard { sequencer: self, id };

        self.environment.show_mode(Mode::Workout);
        self.environment.set_framing(Mode::Workout);

        if !self.request_camera(id).await {
            return Ok(Outcome::Cancelled);
        }

        match Abortable::new(self.run(id), registration).await {
            Ok(outcome) => Ok(outcome),
            Err(Aborted) => Ok(Outcome::Cancelled),
        }
    }

    /// Cancels the active workout without reporting a reward. Does nothing if idle.
    pub fn stop(&self) {
        let run = self.active.borrow_mut().take();
        let Some(run) = run else {
            debug!("no workout to stop");
            return;
        };
        run.timer.abort();
        info!("cancelled workout in phase {}", run.sequence.cursor());
        self.teardown(run);
    }

    /// Returns `false` if the workout was cancelled while the camera was requested.
    ///
    /// The request is not abortable: a camera granted after [`Sequencer::stop`] is
    /// released as soon as the grant arrives.
    async fn request_camera(&self, id: u64) -> bool {
        match self.environment.acquire_camera().await {
            Ok(()) => {
                if self.with_run(id, |run| run.camera = true).is_none() {
                    debug!("camera granted after cancellation");
                    self.environment.release_camera();
                    return false;
                }
                true
            }
            Err(err) => {
                warn!("continuing without camera preview: {err}");
                self.is_current(id)
            }
        }
    }

    async fn run(&self, id: u64) -> Outcome {
        loop {
            let phase = match self.with_run(id, |run| run.sequence.current().cloned()) {
                None => return Outcome::Cancelled,
                Some(None) => return self.complete(id),
                Some(Some(phase)) => phase,
            };

            if !self.run_phase(id, &phase).await {
                return Outcome::Cancelled;
            }

            self.environment.sleep(PHASE_PAUSE).await;

            if self.with_run(id, |run| run.sequence.advance()).is_none() {
                return Outcome::Cancelled;
            }
        }
    }

    /// Returns `false` if the workout was cancelled during the phase.
    async fn run_phase(&self, id: u64, phase: &Phase) -> bool {
        debug!("running {:?} phase {}", phase.kind, phase.name);
        self.environment.play(phase.clip);
        self.environment.show_phase(phase);
        self.say(&format!("Starting {}. {} seconds.", phase.name, phase.duration));

        let countdown = Countdown::new(phase.duration);
        self.show_tick(&countdown.current());

        for tick in countdown {
            self.environment.sleep(TICK).await;
            // stop() may have been called by a collaborator during the last tick
            if !self.is_current(id) {
                return false;
            }
            self.show_tick(&tick);
        }

        if !self.is_current(id) {
            return false;
        }
        self.say(PHRASE_DONE);
        true
    }

    fn show_tick(&self, tick: &Tick) {
        self.environment.show_countdown(tick);
        if tick.is_final_warning() {
            self.say(PHRASE_FINAL_WARNING);
        }
    }

    fn complete(&self, id: u64) -> Outcome {
        let run = self.active.borrow_mut().take_if(|run| run.id == id);
        let Some(run) = run else {
            return Outcome::Cancelled;
        };

        let reward = run.sequence.reward();
        info!("completed workout (+{reward} XP)");
        self.say(PHRASE_COMPLETE);

        let previous_level = self.progress.level();
        let level_up = match self.progress.add_reward(reward) {
            Ok(outcome) => outcome.leveled_up.then_some(outcome.level),
            Err(err) => {
                error!("failed to record reward of {reward} XP: {err}");
                let level = self.progress.level();
                (level > previous_level).then_some(level)
            }
        };
        self.environment.show_completion(reward);
        if let Some(level) = level_up {
            self.environment.show_level_up(level);
        }

        self.teardown(run);
        Outcome::Completed { reward }
    }

    fn teardown(&self, run: ActiveRun) {
        if run.camera {
            self.environment.release_camera();
        }
        self.environment.show_mode(Mode::Dashboard);
        self.environment.set_framing(Mode::Dashboard);
        self.environment.play(Clip::Idle);
    }

    fn say(&self, phrase: &str) {
        if let Err(err) = self.environment.speak(phrase) {
            debug!("dropped phrase \"{phrase}\": {err}");
        }
    }

    fn is_current(&self, id: u64) -> bool {
        self.with_run(id, |_| ()).is_some()
    }

    /// Returns `None` if the run with `id` is no longer active.
    fn with_run<T>(&self, id: u64, f: impl FnOnce(&mut ActiveRun) -> T) -> Option<T> {
        self.active
            .borrow_mut()
            .as_mut()
            .filter(|run| run.id == id)
            .map(f)
    }
}

/// Tears down the run if the future of [`Sequencer::start`] is dropped while running.
struct RunGuard<'a, E, P>
where
    E: Animator + Presenter + Speech + Camera + Clock,
    P: ProgressService,
{
    sequencer: &'a Sequencer<E, P>,
    id: u64,
}

impl<E, P> Drop for RunGuard<'_, E, P>
where
    E: Animator + Presenter + Speech + Camera + Clock,
    P: ProgressService,
{
    fn drop(&mut self) {
        let run = self
            .sequencer
            .active
            .borrow_mut()
            .take_if(|run| run.id == self.id);
        if let Some(run) = run {
            warn!("workout dropped while running");
            self.sequencer.teardown(run);
        }
    }
}
