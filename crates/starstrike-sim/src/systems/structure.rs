//! Target structure idle rotation.

use glam::DQuat;

use starstrike_core::components::TargetStructure;
use starstrike_core::constants::TARGET_ROTATION_RATE;

/// Spin the structure about +Y. A destroyed structure stays still.
pub fn run(target: &mut TargetStructure) {
    if target.destroyed {
        return;
    }
    target.transform.orientation =
        (DQuat::from_rotation_y(TARGET_ROTATION_RATE) * target.transform.orientation).normalize();
}
