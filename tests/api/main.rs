mod heatwave_events;
