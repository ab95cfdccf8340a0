//! The static-color mediator.
//!
//! One controller owns the canonical (color, brightness, power) state and is
//! the only thing that mutates it. Widgets report user input through the
//! controller's operations; the controller projects the new state back into
//! every *other* widget through its silent programmatic path, so a widget's
//! own just-emitted change is never fed back into its emission path.

use tracing::debug;

use crate::color::HsColor;
use crate::toast::Notice;

/// The single authoritative copy of the panel state. Every widget display
/// is a projection of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalState {
    pub color: HsColor,
    /// Global brightness percentage, 0–100.
    pub brightness: u8,
    pub power: bool,
}

impl Default for CanonicalState {
    fn default() -> Self {
        Self {
            color: HsColor::default(),
            brightness: 80,
            power: false,
        }
    }
}

/// Which widget originated a change. The controller never pushes a value
/// back into its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Wheel,
    Slider,
    Power,
    Preset,
    External,
}

/// Programmatic update paths into each widget: these move visual state
/// without re-triggering the widget's own change events.
pub struct Mirrors {
    pub wheel: Box<dyn Fn(u16, u8)>,
    pub slider: Box<dyn Fn(u8)>,
    pub power: Box<dyn Fn(bool)>,
    /// Hex label and swatch; updated unconditionally (they emit nothing).
    pub readout: Box<dyn Fn(&str, (u8, u8, u8))>,
    /// Brightness percentage label; updated unconditionally.
    pub brightness_label: Box<dyn Fn(u8)>,
}

/// External collaborators, specified only at their interface boundary.
pub struct Collaborators {
    pub clipboard: Box<dyn Fn(&str)>,
    pub notify: Box<dyn Fn(Notice)>,
    /// Device transport stub; no wire protocol exists yet.
    pub device: Box<dyn Fn(&CanonicalState)>,
}

pub struct StaticColorController {
    state: CanonicalState,
    mirrors: Mirrors,
    collaborators: Collaborators,
}

impl StaticColorController {
    /// Build the controller with the seeded default state and push the
    /// initial projection into every widget.
    pub fn new(mirrors: Mirrors, collaborators: Collaborators) -> Self {
        let controller = Self {
            state: CanonicalState::default(),
            mirrors,
            collaborators,
        };
        controller.sync_all();
        controller
    }

    pub fn state(&self) -> &CanonicalState {
        &self.state
    }

    fn sync_all(&self) {
        let color = self.state.color;
        (self.mirrors.wheel)(color.hue(), color.saturation());
        (self.mirrors.readout)(&color.to_hex(), color.to_rgb());
        (self.mirrors.slider)(self.state.brightness);
        (self.mirrors.brightness_label)(self.state.brightness);
        (self.mirrors.power)(self.state.power);
    }

    /// Store a new (hue, saturation) and mirror it everywhere but `origin`.
    pub fn update_color(&mut self, h: i32, s: i32, origin: Origin) {
        let color = HsColor::new(h, s);
        self.state.color = color;

        (self.mirrors.readout)(&color.to_hex(), color.to_rgb());
        if origin != Origin::Wheel {
            (self.mirrors.wheel)(color.hue(), color.saturation());
        }
    }

    /// Finalize a color change: update, then hand the state to the device.
    pub fn commit_color(&mut self, h: i32, s: i32, origin: Origin) {
        self.update_color(h, s, origin);
        debug!(
            hue = self.state.color.hue(),
            saturation = self.state.color.saturation(),
            ?origin,
            "color committed"
        );
        (self.collaborators.device)(&self.state);
    }

    /// Store a new brightness percentage and mirror it everywhere but `origin`.
    pub fn update_brightness(&mut self, percent: i32, origin: Origin) {
        let percent = percent.clamp(0, 100) as u8;
        self.state.brightness = percent;

        (self.mirrors.brightness_label)(percent);
        if origin != Origin::Slider {
            (self.mirrors.slider)(percent);
        }
    }

    pub fn commit_brightness(&mut self, percent: i32, origin: Origin) {
        self.update_brightness(percent, origin);
        debug!(brightness = self.state.brightness, ?origin, "brightness committed");
        (self.collaborators.device)(&self.state);
    }

    /// Flip the lamp power. Power changes take effect immediately.
    pub fn update_power(&mut self, on: bool, origin: Origin) {
        self.state.power = on;
        if origin != Origin::Power {
            (self.mirrors.power)(on);
        }
        debug!(power = on, ?origin, "power toggled");
        (self.collaborators.device)(&self.state);
    }

    /// Apply a preset tile. Malformed palette entries are ignored outright:
    /// no state change and nothing surfaced to the user.
    pub fn on_preset_selected(&mut self, hex: &str) {
        match HsColor::from_hex(hex) {
            Ok(color) => {
                self.commit_color(color.hue() as i32, color.saturation() as i32, Origin::Preset);
            }
            Err(err) => {
                debug!(%err, "preset selection ignored");
            }
        }
    }

    /// Copy the current hex to the clipboard and surface a success notice.
    /// Pure side effect; canonical state is untouched.
    pub fn on_copy_requested(&self) {
        let hex = self.state.color.to_hex();
        (self.collaborators.clipboard)(&hex);
        (self.collaborators.notify)(Notice::success("Copied", hex));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        wheel: Vec<(u16, u8)>,
        slider: Vec<u8>,
        power: Vec<bool>,
        readout: Vec<String>,
        labels: Vec<u8>,
        clipboard: Vec<String>,
        notices: Vec<Notice>,
        device: Vec<CanonicalState>,
    }

    fn recording_controller() -> (StaticColorController, Rc<RefCell<Recorded>>) {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let mirrors = Mirrors {
            wheel: {
                let log = log.clone();
                Box::new(move |h, s| log.borrow_mut().wheel.push((h, s)))
            },
            slider: {
                let log = log.clone();
                Box::new(move |p| log.borrow_mut().slider.push(p))
            },
            power: {
                let log = log.clone();
                Box::new(move |on| log.borrow_mut().power.push(on))
            },
            readout: {
                let log = log.clone();
                Box::new(move |hex, _rgb| log.borrow_mut().readout.push(hex.to_string()))
            },
            brightness_label: {
                let log = log.clone();
                Box::new(move |p| log.borrow_mut().labels.push(p))
            },
        };
        let collaborators = Collaborators {
            clipboard: {
                let log = log.clone();
                Box::new(move |text| log.borrow_mut().clipboard.push(text.to_string()))
            },
            notify: {
                let log = log.clone();
                Box::new(move |notice| log.borrow_mut().notices.push(notice))
            },
            device: {
                let log = log.clone();
                Box::new(move |state| log.borrow_mut().device.push(*state))
            },
        };
        let controller = StaticColorController::new(mirrors, collaborators);
        // Drop the construction-time sync so tests observe only their own calls.
        *log.borrow_mut() = Recorded::default();
        (controller, log)
    }

    #[test]
    fn seeded_default_state() {
        let (controller, _) = recording_controller();
        let state = controller.state();
        assert_eq!(state.color, HsColor::new(33, 255));
        assert_eq!(state.brightness, 80);
        assert!(!state.power);
    }

    #[test]
    fn preset_origin_pushes_into_the_wheel() {
        let (mut controller, log) = recording_controller();
        controller.update_color(10, 200, Origin::Preset);
        let log = log.borrow();
        assert_eq!(log.wheel, vec![(10, 200)]);
        assert_eq!(log.readout.last().unwrap(), &HsColor::new(10, 200).to_hex());
    }

    #[test]
    fn wheel_origin_never_echoes_back_into_the_wheel() {
        let (mut controller, log) = recording_controller();
        controller.update_color(120, 255, Origin::Wheel);
        assert!(log.borrow().wheel.is_empty());
        // The readout still mirrors unconditionally.
        assert_eq!(log.borrow().readout, vec!["#00FF00".to_string()]);
    }

    #[test]
    fn slider_origin_never_echoes_back_into_the_slider() {
        let (mut controller, log) = recording_controller();
        controller.update_brightness(55, Origin::Slider);
        let log = log.borrow();
        assert!(log.slider.is_empty());
        assert_eq!(log.labels, vec![55]);
    }

    #[test]
    fn external_brightness_reaches_the_slider() {
        let (mut controller, log) = recording_controller();
        controller.update_brightness(40, Origin::External);
        assert_eq!(log.borrow().slider, vec![40]);
    }

    #[test]
    fn brightness_clamps_on_every_write() {
        let (mut controller, _) = recording_controller();
        controller.update_brightness(250, Origin::External);
        assert_eq!(controller.state().brightness, 100);
        controller.update_brightness(-9, Origin::External);
        assert_eq!(controller.state().brightness, 0);
    }

    #[test]
    fn rapid_slider_drags_then_preset_do_not_fight() {
        let (mut controller, log) = recording_controller();
        for p in [10, 35, 60, 85] {
            controller.update_brightness(p, Origin::Slider);
        }
        controller.on_preset_selected("#FF0000");
        let log = log.borrow();
        // The preset never touched the slider, the drags never echoed.
        assert!(log.slider.is_empty());
        assert_eq!(log.wheel, vec![(0, 255)]);
        assert_eq!(controller.state().brightness, 85);
        assert_eq!(controller.state().color, HsColor::new(0, 255));
    }

    #[test]
    fn color_commit_reaches_the_device() {
        let (mut controller, log) = recording_controller();
        controller.commit_color(90, 128, Origin::Wheel);
        let log = log.borrow();
        assert_eq!(log.device.len(), 1);
        assert_eq!(log.device[0].color, HsColor::new(90, 128));
    }

    #[test]
    fn invalid_preset_is_silently_ignored() {
        let (mut controller, log) = recording_controller();
        let before = *controller.state();
        controller.on_preset_selected("not-a-color");
        controller.on_preset_selected("");
        assert_eq!(*controller.state(), before);
        let log = log.borrow();
        assert!(log.wheel.is_empty());
        assert!(log.readout.is_empty());
        assert!(log.device.is_empty());
    }

    #[test]
    fn valid_preset_commits_with_preset_origin() {
        let (mut controller, log) = recording_controller();
        controller.on_preset_selected("#00FFCC");
        assert_eq!(controller.state().color, HsColor::new(168, 255));
        let log = log.borrow();
        assert_eq!(log.wheel, vec![(168, 255)]);
        assert_eq!(log.device.len(), 1);
    }

    #[test]
    fn power_origin_never_echoes_back_into_the_switch() {
        let (mut controller, log) = recording_controller();
        controller.update_power(true, Origin::Power);
        assert!(log.borrow().power.is_empty());
        assert!(controller.state().power);
        controller.update_power(false, Origin::External);
        assert_eq!(log.borrow().power, vec![false]);
    }

    #[test]
    fn copy_hits_clipboard_and_notifies_without_state_change() {
        let (controller, log) = recording_controller();
        let before = *controller.state();
        controller.on_copy_requested();
        assert_eq!(*controller.state(), before);
        let log = log.borrow();
        assert_eq!(log.clipboard, vec!["#FF8C00".to_string()]);
        assert_eq!(log.notices.len(), 1);
        assert_eq!(log.notices[0].body, "#FF8C00");
    }
}
