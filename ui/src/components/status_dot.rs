use payloads::FarmerStatus;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl DotColor {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#28a745",
            Self::Yellow => "#ffc107",
            Self::Red => "#dc3545",
            Self::Gray => "#6c757d",
        }
    }

    pub fn for_status(status: FarmerStatus) -> Self {
        match status {
            FarmerStatus::Active => Self::Green,
            FarmerStatus::Deceased => Self::Red,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub color: DotColor,
}

#[function_component]
pub fn StatusDot(props: &Props) -> Html {
    html! {
        <span
            class="inline-block w-2.5 h-2.5 rounded-full mr-2 align-middle"
            style={format!("background-color: {};", props.color.hex())}
        />
    }
}

/// Farmer status label preceded by its dot.
pub fn status_cell(status: FarmerStatus) -> Html {
    html! {
        <>
            <StatusDot color={DotColor::for_status(status)} />
            {status.label()}
        </>
    }
}
