mod test_initialize;
