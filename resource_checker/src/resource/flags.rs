/// Usage flags shared by texture, material and mesh records.

bitflags::bitflags! {
    /// How a resource was reached during a scan
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResourceFlags: u32 {
        /// Only referenced from a script field (a runtime instance)
        const INSTANCE = 1 << 0;
        /// Used by UI graphics
        const GUI = 1 << 1;
        /// The render-settings skybox
        const SKY = 1 << 2;
    }
}
