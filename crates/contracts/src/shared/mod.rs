pub mod tab_descriptor;
