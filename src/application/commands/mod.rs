pub mod kebabs;
