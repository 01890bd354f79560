quantity!(Watts, suffix: "W", precision: 0);
