use std::time::Duration;

use aura_domain::{
    Animator, Camera, Clip, Clock, Level, Mode, Phase, Presenter, ResourceUnavailable, Speech,
    Tick,
};

use crate::browser::Browser;

/// Collaborators of a workout run: the host's rendering combined with the browser's devices.
pub struct Environment<U> {
    pub ui: U,
    pub browser: Browser,
}

impl<U> Environment<U> {
    pub fn new(ui: U, browser: Browser) -> Self {
        Self { ui, browser }
    }
}

impl<U: Animator> Animator for Environment<U> {
    fn play(&self, clip: Clip) {
        self.ui.play(clip);
    }

    fn set_framing(&self, mode: Mode) {
        self.ui.set_framing(mode);
    }
}

impl<U: Presenter> Presenter for Environment<U> {
    fn show_mode(&self, mode: Mode) {
        self.ui.show_mode(mode);
    }

    fn show_phase(&self, phase: &Phase) {
        self.ui.show_phase(phase);
    }

    fn show_countdown(&self, tick: &Tick) {
        self.ui.show_countdown(tick);
    }

    fn show_completion(&self, reward: u32) {
        self.ui.show_completion(reward);
    }

    fn show_level_up(&self, level: Level) {
        self.ui.show_level_up(level);
    }
}

impl<U> Speech for Environment<U> {
    fn speak(&self, phrase: &str) -> Result<(), ResourceUnavailable> {
        self.browser.speak(phrase)
    }
}

impl<U> Camera for Environment<U> {
    async fn acquire_camera(&self) -> Result<(), ResourceUnavailable> {
        self.browser.acquire_camera().await
    }

    fn release_camera(&self) {
        self.browser.release_camera();
    }
}

impl<U> Clock for Environment<U> {
    async fn sleep(&self, duration: Duration) {
        self.browser.sleep(duration).await;
    }
}
