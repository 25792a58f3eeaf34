// Adapter: charging a Lightning-only phone from a USB-C charger.

// ============================================================================
// Example: Adapter (USB-C to Lightning)
// ============================================================================

/// What the phone expects.
pub trait LightningCharger {
    fn charge_phone(&self) -> String;
}

/// What we actually have.
pub trait UsbCCharger {
    fn charge_usb_c(&self) -> String;
}

pub struct ChargerXyz;

impl LightningCharger for ChargerXyz {
    fn charge_phone(&self) -> String {
        "Charging phone with ChargerXyz".to_string()
    }
}

pub struct ChargerSrt;

impl UsbCCharger for ChargerSrt {
    fn charge_usb_c(&self) -> String {
        "Charging USB-C phone with ChargerSrt".to_string()
    }
}

/// Makes any USB-C charger usable where a Lightning charger is expected.
pub struct UsbCToLightning<C> {
    inner: C,
}

impl<C: UsbCCharger> UsbCToLightning<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: UsbCCharger> LightningCharger for UsbCToLightning<C> {
    fn charge_phone(&self) -> String {
        let inner = self.inner.charge_usb_c();
        log::debug!("adapter forwarded: {inner}");
        format!("{inner} through UsbCToLightning")
    }
}

pub struct IPhone {
    charger: Box<dyn LightningCharger>,
}

impl IPhone {
    pub fn new(charger: Box<dyn LightningCharger>) -> Self {
        Self { charger }
    }

    pub fn charge(&self) -> String {
        log::info!("Charging iPhone");
        self.charger.charge_phone()
    }
}

// ============================================================================
// Tests
// ============================================================================
