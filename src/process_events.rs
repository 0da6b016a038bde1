use log::info;
use raylib::prelude::*;

use maze_viewer::core::{CameraOrientationTracker, MoveOutcome, PointerDrag, Session};

/// Something the frame loop has to react to (sound, banner).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    Move(MoveOutcome),
    Restart,
}

/// Route one key press. `R` restarts, arrows move the ball with the
/// camera's current yaw, everything else is dropped.
pub fn handle_key_press(
    key: KeyboardKey,
    session: &mut Session,
    camera: &mut CameraOrientationTracker,
) -> Option<FrameEvent> {
    if key == KeyboardKey::KEY_R {
        session.reset();
        camera.reset();
        info!("game restarted");
        return Some(FrameEvent::Restart);
    }
    match session.handle_key(key, camera.normalized_rotation()) {
        MoveOutcome::Ignored => None,
        outcome => Some(FrameEvent::Move(outcome)),
    }
}

/// Poll raylib input for this frame.
///
/// Mouse samples feed the drag accumulator, which the camera drains exactly
/// once here whether or not the button is down. Key presses are then
/// resolved in arrival order.
pub fn process_events(
    window: &mut RaylibHandle,
    pointer: &mut PointerDrag,
    camera: &mut CameraOrientationTracker,
    session: &mut Session,
) -> Vec<FrameEvent> {
    pointer.update(window.get_mouse_x() as f32);
    pointer.set_button(window.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT));
    camera.update(pointer);

    let mut events = Vec::new();
    while let Some(key) = window.get_key_pressed() {
        if let Some(ev) = handle_key_press(key, session, camera) {
            events.push(ev);
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_viewer::core::{GridPos, Maze};

    fn setup() -> (Session, CameraOrientationTracker) {
        let maze = Maze::parse("3\n  *\n*X \n   \n").unwrap();
        (Session::new(maze), CameraOrientationTracker::new(1.0))
    }

    #[test]
    fn arrows_move_other_keys_dropped() {
        let (mut s, mut cam) = setup();
        assert_eq!(handle_key_press(KeyboardKey::KEY_SPACE, &mut s, &mut cam), None);
        assert_eq!(
            handle_key_press(KeyboardKey::KEY_RIGHT, &mut s, &mut cam),
            Some(FrameEvent::Move(MoveOutcome::Moved { to: GridPos::new(0, 1), moves: 1 }))
        );
        assert_eq!(
            handle_key_press(KeyboardKey::KEY_UP, &mut s, &mut cam),
            Some(FrameEvent::Move(MoveOutcome::Blocked))
        );
    }

    #[test]
    fn keys_follow_camera_yaw() {
        let (mut s, mut cam) = setup();
        // turn the camera half way round: left now moves the ball east
        cam.apply_drag(180.0, true);
        assert_eq!(
            handle_key_press(KeyboardKey::KEY_LEFT, &mut s, &mut cam),
            Some(FrameEvent::Move(MoveOutcome::Moved { to: GridPos::new(0, 1), moves: 1 }))
        );
    }

    #[test]
    fn restart_resets_ball_and_camera() {
        let (mut s, mut cam) = setup();
        handle_key_press(KeyboardKey::KEY_RIGHT, &mut s, &mut cam);
        cam.apply_drag(90.0, true);
        assert_eq!(handle_key_press(KeyboardKey::KEY_R, &mut s, &mut cam), Some(FrameEvent::Restart));
        assert_eq!(s.ball(), GridPos::ORIGIN);
        assert_eq!(s.moves(), 0);
        assert_eq!(cam.normalized_rotation(), 0.0);
    }
}
