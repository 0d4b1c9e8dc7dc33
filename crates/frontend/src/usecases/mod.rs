pub mod u508_load_integration_data;
