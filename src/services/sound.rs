//! Desktop notification sound playback

use tokio::{process::Command, runtime::Handle};
use tracing::{debug, warn};

use super::feedback::SoundPlayer;

/// Event-sound player binary from libcanberra
const PLAYER_BINARY: &str = "canberra-gtk-play";

/// Plays a freedesktop sound-theme event through `canberra-gtk-play`
#[derive(Debug, Clone)]
pub struct CanberraSoundPlayer {
    sound_id: String,
}

impl CanberraSoundPlayer {
    pub fn new(sound_id: impl Into<String>) -> Self {
        Self { sound_id: sound_id.into() }
    }

    pub fn sound_id(&self) -> &str {
        &self.sound_id
    }
}

impl SoundPlayer for CanberraSoundPlayer {
    fn play(&self) {
        let Ok(handle) = Handle::try_current() else {
            warn!("No async runtime available, skipping sound '{}'", self.sound_id);
            return;
        };

        let sound_id = self.sound_id.clone();
        handle.spawn(async move {
            if let Err(e) = play_event_sound(&sound_id).await {
                debug!("Sound playback skipped: {}", e);
            }
        });
    }
}

/// Run the player to completion for a single sound event
pub async fn play_event_sound(sound_id: &str) -> Result<(), String> {
    debug!("Playing sound event '{}'", sound_id);

    let output = Command::new(PLAYER_BINARY)
        .args(["-i", sound_id])
        .output()
        .await
        .map_err(|e| format!("Failed to execute {}: {}", PLAYER_BINARY, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} failed: {}", PLAYER_BINARY, stderr.trim()));
    }

    Ok(())
}
