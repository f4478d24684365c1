//! Bidirectional mapping between display components and elapsed frame counts,
//! including the SMPTE drop-frame skip correction.

use crate::components::Components;
use crate::frame_count::FrameCount;
use crate::rate::FrameRate;
use crate::timebase::SubFramesBase;

const SECONDS_PER_DAY: i64 = 86_400;

/// Total elapsed frame count of the given component values.
///
/// Pure function of the components; the upper limit is enforced by callers,
/// not here. For drop rates the skipped frame codes (the first
/// `frames_dropped_per_minute` codes of every minute that is not a multiple
/// of ten) are subtracted from the tally.
pub fn frame_count_of(components: Components, rate: FrameRate, base: SubFramesBase) -> FrameCount {
    let elapsed_seconds = components.days as i64 * SECONDS_PER_DAY
        + components.hours as i64 * 3600
        + components.minutes as i64 * 60
        + components.seconds as i64;

    let mut frames = elapsed_seconds * rate.max_frames() + components.frames as i64;

    if rate.is_drop() {
        let total_minutes = elapsed_seconds / 60;
        let dropped = rate.frames_dropped_per_minute() * (total_minutes - total_minutes / 10);
        frames -= dropped;
    }

    FrameCount::from_sub_frames(frames * base.value() + components.sub_frames as i64, base)
}

/// Component values of the given elapsed frame count. Exact inverse of
/// [`frame_count_of`] for every count in `0 ..= max_sub_frame_count_expressible`.
///
/// For drop rates, the dropped codes are re-inserted before dividing through
/// the rate so that minute/second boundaries land on the displayed numbering.
pub fn components_of(frame_count: FrameCount, rate: FrameRate) -> Components {
    let base = frame_count.base().value();
    let mut frames = frame_count.sub_frame_count().div_euclid(base);
    let sub_frames = frame_count.sub_frame_count().rem_euclid(base);

    if rate.is_drop() {
        let dropped_per_minute = rate.frames_dropped_per_minute();
        // lengths of a displayed minute / ten-minute group, in actual frames
        let frames_per_minute = rate.max_frames() * 60 - dropped_per_minute;
        let frames_per_ten_minutes = rate.max_frames() * 600 - dropped_per_minute * 9;

        let ten_minute_groups = frames.div_euclid(frames_per_ten_minutes);
        let remainder = frames.rem_euclid(frames_per_ten_minutes);

        frames += dropped_per_minute * 9 * ten_minute_groups;
        if remainder > dropped_per_minute {
            frames += dropped_per_minute * ((remainder - dropped_per_minute) / frames_per_minute);
        }
    }

    let fps = rate.max_frames();
    let total_seconds = frames.div_euclid(fps);

    Components {
        days: (total_seconds / SECONDS_PER_DAY) as i32,
        hours: (total_seconds / 3600 % 24) as i32,
        minutes: (total_seconds / 60 % 60) as i32,
        seconds: (total_seconds % 60) as i32,
        frames: frames.rem_euclid(fps) as i32,
        sub_frames: sub_frames as i32,
    }
}
