use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Cleared when the owning component unmounts. Async completions check it
/// before touching component state.
#[derive(Clone)]
pub struct Mounted(Rc<Cell<bool>>);

impl Mounted {
    pub fn get(&self) -> bool {
        self.0.get()
    }
}

#[hook]
pub fn use_mounted() -> Mounted {
    let flag = use_memo((), |_| Rc::new(Cell::new(true)));

    {
        let flag = (*flag).clone();
        use_effect_with((), move |_| {
            flag.set(true);
            move || flag.set(false)
        });
    }

    Mounted((*flag).clone())
}
