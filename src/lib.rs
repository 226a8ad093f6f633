pub mod mediaorg_core;
