mod flatten_good;
