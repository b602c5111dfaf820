//! Fire-and-forget audio triggers
//!
//! The core never knows how (or whether) sound is rendered; it fires three
//! triggers through `AudioSink` at the moments the simulation defines. The
//! WASM implementation generates the effects procedurally with Web Audio
//! oscillators; any failure is swallowed and never interrupts the simulation.

/// The three sounds the game can ask for
pub trait AudioSink {
    /// Player left the ground
    fn on_jump(&mut self);
    /// A score milestone was crossed
    fn on_milestone(&mut self);
    /// The round-ending collision
    fn on_collision(&mut self);
}

/// Silent sink for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn on_jump(&mut self) {}
    fn on_milestone(&mut self) {}
    fn on_collision(&mut self) {}
}

/// Web Audio sink (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct WebAudioSink {
    ctx: Option<web_sys::AudioContext>,
}

#[cfg(target_arch = "wasm32")]
impl Default for WebAudioSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl WebAudioSink {
    pub fn new() -> Self {
        // May fail outside a secure context; the game plays on silently
        let ctx = web_sys::AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("failed to create AudioContext - audio disabled");
        }
        Self { ctx }
    }

    /// Oscillator + gain envelope routed to the destination
    fn create_osc(
        ctx: &web_sys::AudioContext,
        osc_type: web_sys::OscillatorType,
    ) -> Option<(web_sys::OscillatorNode, web_sys::GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        osc.set_type(osc_type);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;
        Some((osc, gain))
    }

    /// Short upward sweep, 300 -> 500 Hz over 100 ms
    fn play_jump(ctx: &web_sys::AudioContext) -> Option<()> {
        let (osc, gain) = Self::create_osc(ctx, web_sys::OscillatorType::Sine)?;
        let t = ctx.current_time();
        osc.frequency().set_value_at_time(300.0, t).ok()?;
        osc.frequency()
            .exponential_ramp_to_value_at_time(500.0, t + 0.1)
            .ok()?;
        gain.gain().set_value_at_time(0.3, t).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.1)
            .ok()?;
        osc.start().ok()?;
        osc.stop_with_when(t + 0.1).ok()?;
        Some(())
    }

    /// Two-note chime, 800 then 1000 Hz
    fn play_milestone(ctx: &web_sys::AudioContext) -> Option<()> {
        let (osc, gain) = Self::create_osc(ctx, web_sys::OscillatorType::Sine)?;
        let t = ctx.current_time();
        osc.frequency().set_value_at_time(800.0, t).ok()?;
        osc.frequency().set_value_at_time(1000.0, t + 0.05).ok()?;
        gain.gain().set_value_at_time(0.2, t).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.15)
            .ok()?;
        osc.start().ok()?;
        osc.stop_with_when(t + 0.15).ok()?;
        Some(())
    }

    /// Harsh downward sweep, sawtooth 400 -> 50 Hz over 300 ms
    fn play_collision(ctx: &web_sys::AudioContext) -> Option<()> {
        let (osc, gain) = Self::create_osc(ctx, web_sys::OscillatorType::Sawtooth)?;
        let t = ctx.current_time();
        osc.frequency().set_value_at_time(400.0, t).ok()?;
        osc.frequency()
            .exponential_ramp_to_value_at_time(50.0, t + 0.3)
            .ok()?;
        gain.gain().set_value_at_time(0.3, t).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.3)
            .ok()?;
        osc.start().ok()?;
        osc.stop_with_when(t + 0.3).ok()?;
        Some(())
    }

    fn with_ctx(&self, play: impl Fn(&web_sys::AudioContext) -> Option<()>) {
        let Some(ctx) = &self.ctx else { return };
        // Browsers suspend the context until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        let _ = play(ctx);
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioSink for WebAudioSink {
    fn on_jump(&mut self) {
        self.with_ctx(Self::play_jump);
    }

    fn on_milestone(&mut self) {
        self.with_ctx(Self::play_milestone);
    }

    fn on_collision(&mut self) {
        self.with_ctx(Self::play_collision);
    }
}
