use yew::prelude::*;

use super::use_mounted;
use crate::utils::Debouncer;

/// `value`, settled for `delay_ms`. Intermediate values never come out.
#[hook]
pub fn use_debounced_value<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let settled = use_state_eq(|| value.clone());
    let debouncer = use_mut_ref(Debouncer::<T>::new);
    let mounted = use_mounted();

    {
        let settled = settled.clone();
        use_effect_with(value, move |value| {
            let ticket = debouncer.borrow_mut().push(value.clone());
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                if !mounted.get() {
                    return;
                }
                let fired = debouncer.borrow_mut().fire(ticket);
                if let Some(value) = fired {
                    settled.set(value);
                }
            });
        });
    }

    (*settled).clone()
}
