mod tagged;
