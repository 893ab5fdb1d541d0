use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// `false` on the first render, `true` one frame after the component
/// mounts. Entrance animations key off it to play immediately.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state_eq(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::MOUNT_FRAME_MS, move || {
                    mounted.set(true);
                });
                // Dropping the handle cancels it if we unmount first
                move || drop(timeout)
            },
            (),
        );
    }

    *mounted
}
