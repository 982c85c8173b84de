use std::{cell::RefCell, time::Duration};

use aura_domain::{Camera, Clock, ResourceUnavailable, Speech};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack,
    SpeechSynthesisUtterance,
};

/// Speech synthesis, webcam and timers of the browser window.
#[derive(Default)]
pub struct Browser {
    video: Option<HtmlVideoElement>,
    stream: RefCell<Option<MediaStream>>,
}

impl Browser {
    /// The camera feed is attached to `video` while the camera is acquired.
    #[must_use]
    pub fn with_video(video: HtmlVideoElement) -> Self {
        Self {
            video: Some(video),
            stream: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn is_camera_active(&self) -> bool {
        self.stream.borrow().is_some()
    }
}

impl Speech for Browser {
    fn speak(&self, phrase: &str) -> Result<(), ResourceUnavailable> {
        let window =
            web_sys::window().ok_or_else(|| ResourceUnavailable::Speech("no window".to_string()))?;
        let synthesis = window.speech_synthesis().map_err(speech_error)?;
        let utterance = SpeechSynthesisUtterance::new_with_text(phrase).map_err(speech_error)?;
        synthesis.speak(&utterance);
        Ok(())
    }
}

impl Camera for Browser {
    async fn acquire_camera(&self) -> Result<(), ResourceUnavailable> {
        let window =
            web_sys::window().ok_or_else(|| ResourceUnavailable::Camera("no window".to_string()))?;
        let devices = window.navigator().media_devices().map_err(camera_error)?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(camera_error)?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(camera_error)?
            .dyn_into::<MediaStream>()
            .map_err(camera_error)?;

        if let Some(video) = &self.video {
            video.set_src_object(Some(&stream));
        }
        if let Some(previous) = self.stream.replace(Some(stream)) {
            stop_tracks(&previous);
        }
        Ok(())
    }

    fn release_camera(&self) {
        let stream = self.stream.take();
        if let Some(stream) = stream {
            stop_tracks(&stream);
            debug!("camera released");
        }
        if let Some(video) = &self.video {
            video.set_src_object(None);
        }
    }
}

impl Clock for Browser {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn speech_error(err: JsValue) -> ResourceUnavailable {
    ResourceUnavailable::Speech(format!("{err:?}"))
}

#[allow(clippy::needless_pass_by_value)]
fn camera_error(err: JsValue) -> ResourceUnavailable {
    ResourceUnavailable::Camera(format!("{err:?}"))
}
