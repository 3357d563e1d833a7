/*!
# `RUN`

## Purpose
Start the program at its first line.

## Remarks
Variables are not reset. Direct mode only.

## Example
```text
10 PRINT 42
RUN
42
```

*/
