macro_rules! register {
    ($($module:ident),+) => {
        $(
            pub mod $module;
        )+

        paste::paste! {
            pub enum Adapter {
                $(
                    [<$module:camel>]($module::Adapter),
                )+
            }

            $(
                impl From<$module::Adapter> for Adapter {
                    fn from(adapter: $module::Adapter) -> Self {
                        Self::[<$module:camel>](adapter)
                    }
                }
            )+

            impl Adapter {
                pub fn is_complete(&self) -> bool {
                    match self {
                        $(
                            Self::[<$module:camel>](adapter) => adapter.is_complete(),
                        )+
                    }
                }

                pub fn reset(&mut self) {
                    match self {
                        $(
                            Self::[<$module:camel>](adapter) => adapter.reset(),
                        )+
                    }
                }

                pub fn copy_chunk(&mut self, slice: &[u8]) -> (Vec<u8>, usize) {
                    match self {
                        $(
                            Self::[<$module:camel>](adapter) => adapter.copy_chunk(slice),
                        )+
                    }
                }
            }
        }
    }
}

register! { planar }
